//! Question router initialization
//!
//! Builds the Groq client and the question router from server configuration.
//! The API key comes from `GROQ_API_KEY`; a missing key aborts startup.

use crate::config::ServerConfig;
use anyhow::Result;
use askroute_llm::{GroqProvider, LLMClient, QuestionRouter, RouterConfig};
use std::sync::Arc;
use tracing::info;

/// Initialize the question router backed by Groq
pub fn init_router(config: &ServerConfig) -> Result<QuestionRouter> {
    let provider = GroqProvider::from_env_with_base_url(config.llm_base_url.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize LLM provider: {}", e))?;

    info!("LLM provider configured: {} ({})", provider.name(), provider.base_url());

    Ok(init_router_with_client(Arc::new(provider)))
}

/// Initialize the question router with an explicit client
pub fn init_router_with_client(client: Arc<dyn LLMClient>) -> QuestionRouter {
    let router_config = RouterConfig::default();
    info!("Question router using model {}", router_config.model());
    QuestionRouter::new(client, router_config)
}
