//! Classify-then-dispatch pipeline

use crate::client::LLMClient;
use crate::error::{LLMError, Result};
use crate::router::category::Category;
use crate::router::classifier::QuestionClassifier;
use crate::router::config::RouterConfig;
use crate::router::dispatcher::AnswerDispatcher;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Answer together with the category that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutedAnswer {
    pub category: Category,
    pub answer: String,
}

/// Routes a question to the answer handler of its category.
///
/// Each call to [`ask`](Self::ask) makes one classification call and, for a
/// known category, exactly one answer call.
pub struct QuestionRouter {
    classifier: QuestionClassifier,
    dispatcher: AnswerDispatcher,
}

impl QuestionRouter {
    /// Create a router whose classifier and dispatcher share one client
    pub fn new(client: Arc<dyn LLMClient>, config: RouterConfig) -> Self {
        Self {
            classifier: QuestionClassifier::new(client.clone(), config.clone()),
            dispatcher: AnswerDispatcher::new(client, config),
        }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(client, RouterConfig::default())
    }

    /// Classify the question and answer it with the matching handler.
    ///
    /// Returns [`LLMError::Unclassified`] without an answer call when the
    /// label is not a known category.
    pub async fn ask(&self, question: &str) -> Result<RoutedAnswer> {
        let label = self.classifier.classify(question).await?;
        let category = Category::from_label(&label);

        info!(label = %label, category = %category, "Question classified");

        if !category.is_known() {
            return Err(LLMError::Unclassified(label));
        }

        let answer = self.dispatcher.handler_for(category).answer(question).await?;

        Ok(RoutedAnswer { category, answer })
    }

    pub fn classifier(&self) -> &QuestionClassifier {
        &self.classifier
    }
}
