use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::text::PdfError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF decode error: {0}")]
    PdfDecode(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("AI extraction is not configured")]
    AiUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<PdfError> for AppError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::NotPdf => AppError::Validation("Uploaded file is not a PDF".to_string()),
            PdfError::Decode(_) | PdfError::NoText => AppError::PdfDecode(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PdfDecode(msg) => {
                tracing::warn!("PDF decode failed: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PDF_DECODE_ERROR",
                    "Could not read text from the PDF. Please upload a valid, text-selectable PDF."
                        .to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "AI extraction failed. Please try again.".to_string(),
                )
            }
            AppError::AiUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_UNAVAILABLE",
                "AI extraction is not configured on this server".to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
