//! askroute HTTP Server
//!
//! Classifies questions and answers them with a category-specific prompt.

use anyhow::Result;
use askroute_server::{api, config::ServerConfig, engine, logging};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    logging::init_tracing(&config)?;
    info!("Loaded configuration: {:?}", config);

    // Fails when GROQ_API_KEY is missing
    let router = engine::init_router(&config)?;
    info!("Question router initialized");

    let app = api::create_router(Arc::new(router));

    // Start server
    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Ask API: POST http://{}/ask/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
