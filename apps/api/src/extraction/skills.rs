//! Skill list extraction from the skills section.

use std::collections::HashSet;

use crate::extraction::limits::{MAX_SKILLS, MAX_SKILL_LEN, MIN_SKILL_LEN};
use crate::extraction::sections::{extract_section, strip_bullet, SKILLS_HEADINGS};

const SKILL_SEPARATORS: [char; 5] = [',', ';', '•', '·', '|'];

/// Header words and connectives that show up as tokens but are never skills.
const STOPWORDS: &[&str] = &[
    "skills",
    "skill",
    "technical skills",
    "soft skills",
    "technologies",
    "technology",
    "tools",
    "tool",
    "languages",
    "frameworks",
    "libraries",
    "databases",
    "platforms",
    "other",
    "others",
    "and",
    "with",
    "the",
    "or",
    "of",
    "in",
    "for",
    "to",
    "an",
    "etc",
    "including",
    "using",
    "proficient",
    "familiar",
    "experience",
    "knowledge",
];

/// Longest "Label:" prefix that is stripped from a token.
const MAX_LABEL_LEN: usize = 30;

pub fn extract_skills(text: &str) -> Vec<String> {
    let section = extract_section(text, SKILLS_HEADINGS);
    if section.is_empty() {
        return Vec::new();
    }
    parse_skill_list(&section)
}

/// Splits a free-form skill list into unique tokens, keeping the first-seen
/// casing and the original order.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    let normalized = raw.replace('\n', ",");
    let mut seen = HashSet::new();

    normalized
        .split(SKILL_SEPARATORS)
        .map(clean_token)
        .filter(|token| {
            let len = token.chars().count();
            (MIN_SKILL_LEN..MAX_SKILL_LEN).contains(&len)
        })
        .filter(|token| !STOPWORDS.contains(&token.to_lowercase().as_str()))
        .filter(|token| seen.insert(token.to_lowercase()))
        .take(MAX_SKILLS)
        .map(String::from)
        .collect()
}

fn clean_token(token: &str) -> &str {
    let token = strip_bullet(token.trim());
    let token = match token.split_once(':') {
        Some((label, rest)) if label.chars().count() <= MAX_LABEL_LEN => rest.trim(),
        _ => token,
    };
    token.trim_end_matches('.').trim()
}
