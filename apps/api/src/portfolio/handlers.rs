use axum::Json;
use serde::Deserialize;

use crate::models::portfolio::{PortfolioRecord, PortfolioUpdate};
use crate::models::resume::ResumeRecord;
use crate::portfolio::merge::merge_portfolio;
use crate::portfolio::transform::transform_resume;

#[derive(Deserialize)]
pub struct MergeRequest {
    pub original: PortfolioRecord,
    #[serde(default)]
    pub updates: PortfolioUpdate,
}

/// POST /api/v1/portfolio/transform
pub async fn handle_transform(Json(resume): Json<ResumeRecord>) -> Json<PortfolioRecord> {
    Json(transform_resume(&resume))
}

/// POST /api/v1/portfolio/merge
pub async fn handle_merge(Json(req): Json<MergeRequest>) -> Json<PortfolioRecord> {
    Json(merge_portfolio(req.original, req.updates))
}
