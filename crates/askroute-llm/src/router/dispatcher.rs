//! Category → handler dispatch

use crate::client::LLMClient;
use crate::router::category::Category;
use crate::router::config::RouterConfig;
use crate::router::handler::{AnswerHandler, TemplateAnswerHandler, UnclassifiedHandler};
use std::sync::Arc;

/// Selects the answer handler for a category
pub struct AnswerDispatcher {
    client: Arc<dyn LLMClient>,
    config: RouterConfig,
}

impl AnswerDispatcher {
    /// Create a new dispatcher
    pub fn new(client: Arc<dyn LLMClient>, config: RouterConfig) -> Self {
        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(client, RouterConfig::default())
    }

    /// Handler for a resolved category; `Other` gets the placeholder handler
    pub fn handler_for(&self, category: Category) -> Box<dyn AnswerHandler> {
        match category.template() {
            Some(template) => Box::new(TemplateAnswerHandler::new(
                category,
                template,
                self.client.clone(),
                self.config.clone(),
            )),
            None => Box::new(UnclassifiedHandler::new(category.as_str())),
        }
    }

    /// Resolve a raw classifier label and return its handler
    pub fn handler_for_label(&self, label: &str) -> Box<dyn AnswerHandler> {
        match Category::from_label(label) {
            Category::Other => Box::new(UnclassifiedHandler::new(label)),
            category => self.handler_for(category),
        }
    }
}
