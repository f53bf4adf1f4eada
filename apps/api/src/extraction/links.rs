//! Profile link extraction. Each platform is matched independently and the
//! first occurrence wins.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::resume::Links;

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?\bgithub\.com/[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)?").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?\blinkedin\.com/(?:in|pub|company)/[A-Za-z0-9_%.-]+/?").unwrap()
});

static TWITTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?\b(?:twitter|x)\.com/[A-Za-z0-9_]+").unwrap()
});

// TLD is matched lowercase only so "ASP.NET" and similar tech names are not websites.
static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:(?i:https?://))?(?:(?i:www\.))?\b[A-Za-z0-9][A-Za-z0-9-]*(?:\.[A-Za-z0-9-]+)*\.(?:com|io|dev|me|net|org|co|app|tech|xyz|site|page|ai|design|blog)\b(?:/[^\s,;|)]*)?").unwrap()
});

static PORTFOLIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:portfolio|website)\b\s*[:\-–]?\s*((?:https?://)?[A-Za-z0-9][^\s,;|()]*\.[^\s,;|()]+)").unwrap()
});

const SOCIAL_DOMAINS: &[&str] = &[
    "github.com",
    "linkedin.com",
    "twitter.com",
    "x.com",
    "facebook.com",
    "instagram.com",
    "youtube.com",
    "medium.com",
    "stackoverflow.com",
];

pub fn extract_links(text: &str) -> Links {
    Links {
        github: GITHUB_RE.find(text).map(|m| normalize_url(m.as_str())),
        linkedin: LINKEDIN_RE.find(text).map(|m| normalize_url(m.as_str())),
        twitter: TWITTER_RE.find(text).map(|m| normalize_url(m.as_str())),
        website: find_website(text),
        portfolio: PORTFOLIO_RE
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_url(m.as_str())),
    }
}

/// First personal-looking domain that is neither a social platform nor the
/// domain half of an email address.
fn find_website(text: &str) -> Option<String> {
    WEBSITE_RE
        .find_iter(text)
        .filter(|m| !is_email_fragment(text, m.start(), m.end()))
        .map(|m| m.as_str())
        .filter(|candidate| !is_company_name(candidate))
        .find(|candidate| !is_social(candidate))
        .map(normalize_url)
}

/// "Amazon.com" in an experience line names an employer. A bare domain
/// with a capitalized first label and no scheme, `www.` or path is skipped.
fn is_company_name(candidate: &str) -> bool {
    !candidate.contains("://")
        && !candidate.to_lowercase().starts_with("www.")
        && !candidate.contains('/')
        && candidate.chars().next().is_some_and(char::is_uppercase)
}

fn is_email_fragment(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    matches!(before, Some('@' | '.' | '/')) || after == Some('@')
}

fn is_social(url: &str) -> bool {
    let host = domain_of(url);
    SOCIAL_DOMAINS
        .iter()
        .any(|social| host == *social || host.ends_with(&format!(".{social}")))
}

fn domain_of(url: &str) -> String {
    let without_scheme = url.split("//").nth(1).unwrap_or(url);
    without_scheme
        .split('/')
        .next()
        .unwrap_or("")
        .trim_start_matches("www.")
        .to_lowercase()
}

/// Adds an `https://` scheme when missing and drops trailing punctuation.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim().trim_end_matches(['.', ',', ';', ':', ')']);
    let lower = url.to_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
