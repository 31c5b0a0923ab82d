//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Mock LLM provider for testing
///
/// Scripted responses are handed out in order; once the script is exhausted
/// the default response is returned. Every request is recorded.
pub struct MockProvider {
    name: String,
    default_response: String,
    scripted: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<LLMRequest>>,
    failure: Option<String>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_response("Mock LLM response".to_string())
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self {
            name: "mock".to_string(),
            default_response: response,
            scripted: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create with a sequence of responses, returned one per call
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new();
        *provider.scripted.lock().unwrap_or_else(|e| e.into_inner()) =
            responses.into_iter().map(Into::into).collect();
        provider
    }

    /// Create a provider whose every call fails with `ApiCallFailed`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Requests received so far, in call order
    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let model = request.model.clone();
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request);

        if let Some(ref message) = self.failure {
            return Err(LLMError::ApiCallFailed(message.clone()));
        }

        let content = self
            .scripted
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_else(|| self.default_response.clone());

        Ok(LLMResponse::new(content, model)
            .with_tokens(10)
            .with_finish_reason("stop".to_string()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
