//! Question routing: classify a question, then answer it with a
//! category-specific prompt
//!
//! - Prompt templates: one per category plus the classifier prompt
//! - Classifier: extracts a label from the model's free-text reply
//! - Dispatcher: maps a category to its answer handler
//! - QuestionRouter: runs both stages for one question
//!
//! # Example
//! ```no_run
//! use askroute_llm::{GroqProvider, QuestionRouter};
//! use std::sync::Arc;
//!
//! # async fn example() -> askroute_llm::Result<()> {
//! let provider = Arc::new(GroqProvider::from_env()?);
//! let router = QuestionRouter::with_defaults(provider);
//!
//! let routed = router.ask("What are the legal implications of a contract?").await?;
//! println!("[{}] {}", routed.category, routed.answer);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod handler;
pub mod prompt_templates;
pub mod question_router;

// Re-export main types
pub use category::Category;
pub use classifier::{
    extract_classification, parse_classification, QuestionClassifier, NO_CLASSIFICATION_FOUND,
};
pub use config::{RouterConfig, DEFAULT_MODEL};
pub use dispatcher::AnswerDispatcher;
pub use handler::{AnswerHandler, TemplateAnswerHandler, UnclassifiedHandler};
pub use prompt_templates::PromptTemplate;
pub use question_router::{QuestionRouter, RoutedAnswer};
