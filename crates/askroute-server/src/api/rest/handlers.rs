//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, Json};
use tracing::{error, info, warn};

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Reject missing or blank question text
pub(super) fn validate_question(payload: &AskRequestPayload) -> Result<&str, ServerError> {
    if payload.text.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Field 'text' must be a non-empty string".to_string(),
        ));
    }
    Ok(&payload.text)
}

/// Question endpoint: classify, then answer with the category's handler
#[axum::debug_handler]
pub(super) async fn ask(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<AskRequestPayload>,
) -> Result<Json<AskResponsePayload>, ServerError> {
    let question = validate_question(&payload)?;

    info!("Received question ({} chars)", question.chars().count());

    let routed = state.router.ask(question).await.map_err(|e| {
        let err = ServerError::from(e);
        match &err {
            ServerError::Unclassified => warn!("Question could not be classified"),
            other => error!("Failed to answer question: {}", other),
        }
        err
    })?;

    info!(category = %routed.category, "Question answered");

    Ok(Json(routed.into()))
}
