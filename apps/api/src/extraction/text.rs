//! Text extraction adapter: PDF bytes in, linearized plain text out.

use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;
use tracing::warn;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("file is not a PDF")]
    NotPdf,

    #[error("failed to decode PDF: {0}")]
    Decode(String),

    #[error("PDF contains no selectable text")]
    NoText,
}

/// Decodes a PDF buffer into text. Blocking; callers on an async runtime
/// should run it on the blocking pool.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, PdfError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(PdfError::NotPdf);
    }

    // pdf-extract panics on some malformed documents
    let raw = match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    })) {
        Ok(Ok(raw)) => raw,
        Ok(Err(e)) => {
            warn!("pdf-extract failed: {e}");
            return Err(PdfError::Decode(e.to_string()));
        }
        Err(_) => {
            warn!("pdf-extract panicked on malformed document");
            return Err(PdfError::Decode("malformed document".to_string()));
        }
    };

    let text = normalize_text(&raw);
    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }
    Ok(text)
}

/// Normalizes line endings and whitespace so every extractor sees the same
/// shape: LF only, no trailing spaces, at most one consecutive blank line.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\u{a0}', " ")
        .replace('\u{c}', "\n");

    let mut out: Vec<&str> = Vec::new();
    let mut blank_run = 0;
    for line in unified.lines() {
        let line = line.trim_end();
        if line.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            out.push("");
        } else {
            blank_run = 0;
            out.push(line);
        }
    }

    out.join("\n").trim_matches('\n').to_string()
}
