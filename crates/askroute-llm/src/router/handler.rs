//! Category-specific answer handlers

use crate::client::LLMClient;
use crate::error::{LLMError, Result};
use crate::router::category::Category;
use crate::router::config::RouterConfig;
use crate::router::prompt_templates::PromptTemplate;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Produces an answer to a question of one category
#[async_trait]
pub trait AnswerHandler: Send + Sync {
    /// Category this handler answers
    fn category(&self) -> Category;

    /// Answer the question
    async fn answer(&self, question: &str) -> Result<String>;
}

/// Handler that renders a fixed template and returns the model's reply as-is
pub struct TemplateAnswerHandler {
    category: Category,
    template: PromptTemplate,
    client: Arc<dyn LLMClient>,
    config: RouterConfig,
}

impl TemplateAnswerHandler {
    pub fn new(
        category: Category,
        template: PromptTemplate,
        client: Arc<dyn LLMClient>,
        config: RouterConfig,
    ) -> Self {
        Self {
            category,
            template,
            client,
            config,
        }
    }
}

#[async_trait]
impl AnswerHandler for TemplateAnswerHandler {
    fn category(&self) -> Category {
        self.category
    }

    async fn answer(&self, question: &str) -> Result<String> {
        let prompt = self.template.render(question);
        let response = self.client.call(self.config.request(prompt)).await?;

        debug!(
            category = %self.category,
            tokens = response.tokens_used,
            "Answer generated"
        );

        Ok(response.content)
    }
}

/// Placeholder for labels outside the known categories.
///
/// Never calls the model; answering always fails with
/// [`LLMError::Unclassified`].
pub struct UnclassifiedHandler {
    label: String,
}

impl UnclassifiedHandler {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[async_trait]
impl AnswerHandler for UnclassifiedHandler {
    fn category(&self) -> Category {
        Category::Other
    }

    async fn answer(&self, _question: &str) -> Result<String> {
        Err(LLMError::Unclassified(self.label.clone()))
    }
}
