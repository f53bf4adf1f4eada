use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Nothing is required; a missing API key only disables the AI path.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub llm_model: String,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_upload_bytes: match optional_env("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: match optional_env("PORT") {
                Some(v) => v.parse::<u16>().context("PORT must be a valid port number")?,
                None => DEFAULT_PORT,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            anthropic_api_key: None,
            llm_model: DEFAULT_MODEL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
        }
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
