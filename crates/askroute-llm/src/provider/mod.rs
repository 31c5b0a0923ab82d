//! LLM provider implementations

mod groq;
mod mock;

pub use groq::{GroqProvider, DEFAULT_BASE_URL, GROQ_API_KEY_ENV};
pub use mock::MockProvider;
