//! Server error types

use askroute_llm::LLMError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message returned when a question does not fit any category
pub const UNCLASSIFIED_MESSAGE: &str = "The question cannot be classified.";

/// Message returned when the answer could not be generated.
///
/// Upstream detail stays in the logs.
pub const ANSWER_FAILED_MESSAGE: &str = "Failed to generate an answer.";

/// Message returned for unexpected server-side failures
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error.";

/// Server error type
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Classifier label outside the known categories
    #[error("{}", UNCLASSIFIED_MESSAGE)]
    Unclassified,

    /// LLM call failed
    #[error("LLM error: {0}")]
    LlmError(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) | ServerError::Unclassified => StatusCode::BAD_REQUEST,
            ServerError::LlmError(_) | ServerError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            ServerError::InvalidRequest(msg) => msg,
            ServerError::Unclassified => UNCLASSIFIED_MESSAGE.to_string(),
            ServerError::LlmError(_) => ANSWER_FAILED_MESSAGE.to_string(),
            ServerError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<LLMError> for ServerError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::Unclassified(_) => ServerError::Unclassified,
            other => ServerError::LlmError(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::InternalError(err.to_string())
    }
}
