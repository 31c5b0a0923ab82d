//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use askroute_llm::{QuestionRouter, RoutedAnswer};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<QuestionRouter>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Question payload
#[derive(Debug, Deserialize)]
pub struct AskRequestPayload {
    /// Question text (required, not blank)
    pub text: String,
}

/// Answer payload
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AskResponsePayload {
    /// Lower-case category label
    pub category: String,

    /// Answer text as returned by the model
    pub answer: String,
}

impl From<RoutedAnswer> for AskResponsePayload {
    fn from(routed: RoutedAnswer) -> Self {
        Self {
            category: routed.category.as_str().to_string(),
            answer: routed.answer,
        }
    }
}
