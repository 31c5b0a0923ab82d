//! Server configuration

use askroute_llm::provider::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
///
/// The Groq API key is not part of this struct; it is read from
/// `GROQ_API_KEY` when the question router is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,

    /// Base URL of the OpenAI-compatible chat completions API
    pub llm_base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            llm_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Config file read by [`ServerConfig::load`], without extension
pub const CONFIG_FILE: &str = "config/server";

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        Self::load_from(CONFIG_FILE)
    }

    /// Load from the given config file (optional) layered under `ASKROUTE_*`
    /// environment variables.
    ///
    /// A file that exists but cannot be parsed is an error.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("ASKROUTE").try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", file, e))?;

        Self::from_config(cfg)
    }

    /// Deserialize from an already built configuration
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
