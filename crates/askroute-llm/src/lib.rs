//! askroute LLM Integration
//!
//! This crate routes free-text questions through two LLM calls:
//! - Classification: label the question as legal, accounting, medical or other
//! - Answering: reply with a prompt written for that category
//!
//! **Note**: there is no retry, caching or streaming here. Every call goes
//! straight to the provider and its errors are returned unchanged.

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{GroqProvider, MockProvider};

// Re-export routing
pub use router::{
    AnswerDispatcher, AnswerHandler, Category, QuestionClassifier, QuestionRouter, RoutedAnswer,
    RouterConfig, DEFAULT_MODEL,
};

pub mod client;
pub mod error;
pub mod provider;
pub mod router;
