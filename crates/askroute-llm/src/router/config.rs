//! Configuration shared by the classifier and the answer handlers

use crate::client::LLMRequest;

/// Model used for every call
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Configuration for routing calls.
///
/// Every call goes to [`DEFAULT_MODEL`] with the provider's default sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    model: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl RouterConfig {
    /// Model used for classification and answering
    pub fn model(&self) -> &str {
        &self.model
    }

    pub(crate) fn request(&self, prompt: String) -> LLMRequest {
        LLMRequest::new(prompt, self.model.clone())
    }
}
