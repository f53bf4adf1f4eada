pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as resume;
use crate::portfolio::handlers as portfolio;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route("/api/v1/resume/parse", post(resume::handle_parse_upload))
        .route("/api/v1/resume/parse-text", post(resume::handle_parse_text))
        .route("/api/v1/resume/parse-ai", post(resume::handle_parse_ai))
        // Portfolio shaping
        .route("/api/v1/portfolio/transform", post(portfolio::handle_transform))
        .route("/api/v1/portfolio/merge", post(portfolio::handle_merge))
        .layer(body_limit)
        .with_state(state)
}
