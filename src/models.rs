use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ProcessAnswerRequest {
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnswerVerdict {
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    pub confidence: f64,
    pub feedback: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessAnswerResponse {
    pub status: String,
    pub processed: bool,
    pub result: AnswerVerdict,
}
