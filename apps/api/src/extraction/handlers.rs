use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::ai::extract_with_model;
use crate::extraction::assembler::parse_resume;
use crate::extraction::text::extract_pdf_text;
use crate::models::portfolio::PortfolioRecord;
use crate::models::resume::ResumeRecord;
use crate::portfolio::transform::transform_resume;
use crate::state::AppState;

const UPLOAD_FIELDS: &[&str] = &["resume", "file"];

#[derive(Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub resume: ResumeRecord,
    pub portfolio: PortfolioRecord,
}

impl ParseResponse {
    fn from_text(text: &str) -> Self {
        let resume = parse_resume(text);
        let portfolio = transform_resume(&resume);
        ParseResponse { resume, portfolio }
    }
}

/// POST /api/v1/resume/parse
pub async fn handle_parse_upload(multipart: Multipart) -> Result<Json<ParseResponse>, AppError> {
    let text = read_pdf_upload(multipart).await?;
    Ok(Json(ParseResponse::from_text(&text)))
}

/// POST /api/v1/resume/parse-text
pub async fn handle_parse_text(
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is empty".to_string()));
    }
    Ok(Json(ParseResponse::from_text(&req.text)))
}

/// POST /api/v1/resume/parse-ai
pub async fn handle_parse_ai(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<PortfolioRecord>, AppError> {
    let provider = state.ai.clone().ok_or(AppError::AiUnavailable)?;
    let text = read_pdf_upload(multipart).await?;
    let record = extract_with_model(provider.as_ref(), &text).await?;
    Ok(Json(record))
}

/// Pulls the first `resume`/`file` part out of the form and decodes it on the blocking pool.
async fn read_pdf_upload(mut multipart: Multipart) -> Result<String, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name().is_some_and(|name| UPLOAD_FIELDS.contains(&name)) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some(bytes);
            break;
        }
    }

    let bytes = upload.ok_or_else(|| {
        AppError::Validation("Missing file field 'resume' in multipart form".to_string())
    })?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let size = bytes.len();
    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF decode task failed: {e}")))??;

    info!(bytes = size, chars = text.chars().count(), "Decoded resume upload");
    Ok(text)
}
