//! Groq provider implementation (OpenAI-compatible chat completions)

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

/// Default Groq API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the Groq API key
pub const GROQ_API_KEY_ENV: &str = "GROQ_API_KEY";

/// Groq provider
pub struct GroqProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GroqProvider {
    /// Create a new Groq provider
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create with custom base URL (e.g., a proxy or a local mock server)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create from the `GROQ_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create from the `GROQ_API_KEY` environment variable with custom base URL
    pub fn from_env_with_base_url(base_url: String) -> Result<Self> {
        let api_key = std::env::var(GROQ_API_KEY_ENV).unwrap_or_default();
        Self::from_key(api_key, base_url)
    }

    fn from_key(api_key: String, base_url: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(LLMError::InvalidConfiguration(format!(
                "{} environment variable is not set",
                GROQ_API_KEY_ENV
            )));
        }
        Ok(Self::with_base_url(api_key, base_url))
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LLMClient for GroqProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let body = json!({
            "model": request.model,
            "messages": [
                {
                    "role": "user",
                    "content": request.prompt
                }
            ],
        });

        debug!(model = %request.model, "Sending chat completion request");

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Groq API call failed: {}", e)))?;

        let status = resp.status();
        let resp_text = resp.text().await.map_err(|e| {
            LLMError::ApiCallFailed(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "Groq API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: serde_json::Value = serde_json::from_str(&resp_text).map_err(|e| {
            LLMError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let content = resp_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| LLMError::InvalidResponse("No content in response".to_string()))?
            .to_string();

        let finish_reason = resp_json["choices"][0]["finish_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        let tokens_used = resp_json["usage"]["total_tokens"]
            .as_u64()
            .map(|total| u32::try_from(total).unwrap_or(u32::MAX))
            .unwrap_or(0);

        Ok(LLMResponse::new(content, request.model)
            .with_tokens(tokens_used)
            .with_finish_reason(finish_reason))
    }

    fn name(&self) -> &str {
        "groq"
    }
}
