//! Alternative extraction path: a generative model produces the
//! `PortfolioRecord` directly. The response is treated as untrusted input.

use serde_json::Value;
use tracing::info;

use crate::extraction::assembler::{
    fill_if_empty, placeholder_education, placeholder_experience, DEFAULT_BIO, DEFAULT_EMAIL,
    DEFAULT_NAME, DEFAULT_ROLE, DEFAULT_SKILLS,
};
use crate::extraction::links::normalize_url;
use crate::extraction::prompts::{RESUME_EXTRACT_PROMPT, RESUME_EXTRACT_SYSTEM};
use crate::llm_client::{parse_json_response, CompletionProvider, LlmError};
use crate::models::portfolio::PortfolioRecord;
use crate::portfolio::transform::{transform_education, transform_experience};

/// Asks the model for a portfolio record. Any failure to obtain or parse the
/// JSON is returned as-is; there is no fallback to the heuristic parser.
pub async fn extract_with_model(
    provider: &dyn CompletionProvider,
    resume_text: &str,
) -> Result<PortfolioRecord, LlmError> {
    let prompt = RESUME_EXTRACT_PROMPT.replace("{resume_text}", resume_text);
    let raw = provider.complete(&prompt, RESUME_EXTRACT_SYSTEM).await?;

    let mut value: Value = parse_json_response(&raw)?;
    prune_nulls(&mut value);
    let record: PortfolioRecord = serde_json::from_value(value)?;

    info!(
        experience = record.experience.len(),
        skills = record.skills.len(),
        "Model extraction parsed"
    );
    Ok(normalize_model_record(record))
}

/// Drops `null` members recursively so absent and null keys both take the
/// field's default during deserialization.
fn prune_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(prune_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(prune_nulls);
        }
        _ => {}
    }
}

/// Applies the same display defaults as the heuristic path.
fn normalize_model_record(mut record: PortfolioRecord) -> PortfolioRecord {
    fill_if_empty(&mut record.name, DEFAULT_NAME);
    fill_if_empty(&mut record.email, DEFAULT_EMAIL);
    fill_if_empty(&mut record.role, DEFAULT_ROLE);
    fill_if_empty(&mut record.bio, DEFAULT_BIO);
    if record.experience.is_empty() {
        record.experience.push(transform_experience(&placeholder_experience()));
    }
    if record.education.is_empty() {
        record.education.push(transform_education(&placeholder_education()));
    }
    if record.skills.is_empty() {
        record.skills = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    let links = &mut record.links;
    for link in [
        &mut links.github,
        &mut links.linkedin,
        &mut links.twitter,
        &mut links.website,
        &mut links.portfolio,
    ] {
        *link = link
            .take()
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_url(&url));
    }
    for project in &mut record.projects {
        project.url = project.url.take().filter(|u| !u.trim().is_empty());
        project.github = project
            .github
            .take()
            .filter(|u| !u.trim().is_empty())
            .map(|u| normalize_url(&u));
    }
    record
}
