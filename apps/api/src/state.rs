use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Completion backend for the AI extraction path. `None` when no API key is configured.
    pub ai: Option<Arc<dyn CompletionProvider>>,
}
