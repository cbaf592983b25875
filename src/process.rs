use crate::models::{AnswerVerdict, ProcessAnswerRequest, ProcessAnswerResponse};

// ── Constants ────────────────────────────────────────────────────────────────

const PLACEHOLDER_CONFIDENCE: f64 = 0.95;
const PLACEHOLDER_FEEDBACK: &str = "Great work! Your answer appears to be correct.";

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("No image URL provided")]
    MissingImageUrl,
    #[error("{0}")]
    Unexpected(String),
}

// ── Public API ───────────────────────────────────────────────────────────────

pub fn process_answer(req: &ProcessAnswerRequest) -> Result<ProcessAnswerResponse, ProcessError> {
    let image_url = req
        .image_url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ProcessError::MissingImageUrl)?;

    // Placeholder verdict until real image analysis lands here. The URL is
    // opaque: it is never fetched or parsed.
    let response = ProcessAnswerResponse {
        status: "success".to_string(),
        processed: true,
        result: AnswerVerdict {
            is_correct: true,
            confidence: PLACEHOLDER_CONFIDENCE,
            feedback: PLACEHOLDER_FEEDBACK.to_string(),
        },
    };

    tracing::info!(
        image_url = %image_url,
        result = ?response,
        "processed answer image"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(image_url: Option<&str>) -> ProcessAnswerRequest {
        ProcessAnswerRequest {
            image_url: image_url.map(str::to_string),
        }
    }

    #[test]
    fn non_empty_url_yields_placeholder_verdict() {
        let response = process_answer(&request(Some("https://example.com/a.png"))).unwrap();
        assert_eq!(response.status, "success");
        assert!(response.processed);
        assert!(response.result.is_correct);
        assert_eq!(response.result.confidence, PLACEHOLDER_CONFIDENCE);
        assert_eq!(response.result.feedback, PLACEHOLDER_FEEDBACK);
    }

    #[test]
    fn missing_url_is_rejected() {
        let err = process_answer(&request(None)).unwrap_err();
        assert!(matches!(err, ProcessError::MissingImageUrl));
        assert_eq!(err.to_string(), "No image URL provided");
    }

    #[test]
    fn empty_url_is_rejected() {
        let err = process_answer(&request(Some(""))).unwrap_err();
        assert!(matches!(err, ProcessError::MissingImageUrl));
    }
}
