use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use sf_core::Error;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(ThisError, Debug)]
pub enum ApiError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Pipeline(#[from] Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidQuery(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": message}),
            ),
            ApiError::Pipeline(Error::Fetch(fetch)) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": fetch.to_string(),
                    "kind": fetch.kind(),
                    "status": fetch.status(),
                }),
            ),
            ApiError::Pipeline(other) => {
                error!(error = %other, "Pipeline failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": other.to_string()}),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
