//! Question classification via LLM

use crate::client::{LLMClient, LLMResponse};
use crate::error::Result;
use crate::router::config::RouterConfig;
use crate::router::prompt_templates::CLASSIFIER_PROMPT;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Label returned when the model output carries no classification
pub const NO_CLASSIFICATION_FOUND: &str = "No classification found";

fn classification_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"Classification:\s*(\w+)").expect("classification pattern is valid")
    })
}

/// Extract the classification label from raw model output.
///
/// Returns the first word following `Classification:` as written by the
/// model, or [`NO_CLASSIFICATION_FOUND`] when the marker is absent.
/// Lower-casing happens in [`QuestionClassifier::classify`].
pub fn extract_classification(llm_output: &str) -> String {
    classification_pattern()
        .captures(llm_output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NO_CLASSIFICATION_FOUND.to_string())
}

/// Extract and lower-case the label, as the classifier reports it
pub fn parse_classification(llm_output: &str) -> String {
    extract_classification(llm_output).to_lowercase()
}

/// Classifies questions into a category label using an LLM
pub struct QuestionClassifier {
    client: Arc<dyn LLMClient>,
    config: RouterConfig,
}

impl QuestionClassifier {
    /// Create a new classifier
    pub fn new(client: Arc<dyn LLMClient>, config: RouterConfig) -> Self {
        Self { client, config }
    }

    /// Create with default configuration
    pub fn with_defaults(client: Arc<dyn LLMClient>) -> Self {
        Self::new(client, RouterConfig::default())
    }

    /// Classify a question, returning a lower-cased label.
    ///
    /// The label is not checked against the known categories; see
    /// [`Category::from_label`](crate::router::Category::from_label).
    pub async fn classify(&self, question: &str) -> Result<String> {
        let (label, _) = self.classify_with_metadata(question).await?;
        Ok(label)
    }

    /// Classify a question and return the raw LLM response alongside the label
    pub async fn classify_with_metadata(&self, question: &str) -> Result<(String, LLMResponse)> {
        let prompt = CLASSIFIER_PROMPT.render(question);
        let response = self.client.call(self.config.request(prompt)).await?;

        debug!(raw = %response.content, "Classifier output");

        let label = parse_classification(&response.content);
        Ok((label, response))
    }

    /// Get current configuration
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}
