mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod portfolio;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    // The AI path is optional; without a key only the heuristic routes work
    let ai: Option<Arc<dyn CompletionProvider>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.llm_model.clone())
                .context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(llm))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI extraction disabled");
            None
        }
    };

    info!("Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState {
        config: config.clone(),
        ai,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
