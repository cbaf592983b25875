use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use once_cell::sync::Lazy;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

pub mod models;
pub mod process;

use models::ProcessAnswerRequest;

// Subscriber installation must happen at most once per process, even when
// several callers race on startup.
static INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
});

pub fn init_logging() {
    Lazy::force(&INIT);
}

pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/processAnswer", post(process_answer_endpoint))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn process_answer_endpoint(
    payload: Result<Json<ProcessAnswerRequest>, JsonRejection>,
) -> Response {
    use process::ProcessError;

    let result = match payload {
        Ok(Json(req)) => process::process_answer(&req),
        // Bodies that are not valid JSON (or do not fit the request type)
        // surface as an internal error rather than a validation failure.
        Err(rejection) => Err(ProcessError::Unexpected(rejection.body_text())),
    };

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(ProcessError::MissingImageUrl) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No image URL provided"})),
        )
            .into_response(),
        Err(ProcessError::Unexpected(message)) => {
            tracing::error!(%message, "error processing answer");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal server error", "message": message})),
            )
                .into_response()
        }
    }
}
