mod app;
mod config;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
#[cfg(test)]
mod test_support;

use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::logging::{init_logging, LoggingConfig};
use crate::services::llm_service::{LlmConfig, LlmService};
use crate::services::placeholder::{PlaceholderGenerator, RandomPlaceholders, SeededPlaceholders};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())?;

    let server_config = ServerConfig::from_env();
    let llm_config = LlmConfig::from_env();

    tracing::info!("🤖 LLM model: {} (timeout: {:?}, retries: {})",
                   llm_config.model, llm_config.timeout, llm_config.max_retries);
    let llm_service = LlmService::new(llm_config);
    if !llm_service.is_enabled() {
        tracing::warn!("⚠️ No LLM provider configured; AI endpoints will answer with errors");
    }

    let placeholders: Arc<dyn PlaceholderGenerator> = match server_config.placeholder_seed {
        Some(seed) => {
            tracing::info!("🎲 Using seeded placeholder data (seed: {})", seed);
            Arc::new(SeededPlaceholders::new(seed))
        }
        None => Arc::new(RandomPlaceholders),
    };

    let state = AppState {
        llm_service: Arc::new(llm_service),
        placeholders,
        expose_error_details: !server_config.is_production(),
    };
    let app = app::create_app(state);

    let addr = server_config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 EduNet backend running at http://{}/ ({})", addr, server_config.environment);
    axum::serve(listener, app)
        .await?;

    Ok(())
}
