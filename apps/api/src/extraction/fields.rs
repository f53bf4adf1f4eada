//! Scalar field extractors: email, phone, name, role and bio.
//!
//! Each function reads the whole text and returns an empty string on a miss.
//! Only `extract_role` and `extract_bio` consult the section extractor.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::limits::{
    truncate_chars, BIO_FALLBACK_TARGET_LEN, BIO_SCAN_LINES, MAX_BIO_LEN, MAX_NAME_LEN,
    MAX_ROLE_LEN, NAME_SCAN_LINES, ROLE_SCAN_LINES,
};
use crate::extraction::sections::{
    extract_section, is_heading_line, OBJECTIVE_HEADINGS, SUMMARY_HEADINGS,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?|\b\d{1,3}[\s.-])?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b")
        .unwrap()
});

static RESUME_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:resume|résumé|curriculum vitae|cv)\b").unwrap());

static URL_HINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https?://|www\.|linkedin\.com|github\.com|\.(?:com|io|dev|me|net|org)/").unwrap()
});

static ROLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // seniority + discipline + role noun
        r"(?i)\b(?:(?:senior|junior|lead|principal|staff|associate|chief|sr\.?|jr\.?)\s+)?(?:software|frontend|front-end|backend|back-end|full[- ]?stack|web|mobile|ios|android|data|machine learning|ml|ai|devops|cloud|security|qa|test|systems?|network|platform|site reliability|infrastructure|embedded|game|product|ux|ui|ux/ui|ui/ux|graphic|visual)\s+(?:engineer|developer|designer|scientist|analyst|architect|manager|administrator|consultant|specialist)\b",
        // management titles
        r"(?i)\b(?:(?:senior|associate|technical)\s+)?(?:project|product|program|engineering|marketing|sales|operations|account|hr|general)\s+manager\b",
        r"(?i)\b(?:vp|vice president|director|head)\s+of\s+[a-z]+(?:\s+[a-z]+)?",
        r"(?i)\b(?:cto|ceo|cfo|coo|chief [a-z]+ officer|co-?founder|founder)\b",
        r"(?i)\b(?:(?:senior|junior|lead)\s+)?(?:engineer|developer|programmer|data scientist|data analyst|designer|consultant)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().trim_end_matches('.').to_string())
        .unwrap_or_default()
}

pub fn extract_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Picks the first of the leading lines shaped like a person's name.
pub fn extract_name(text: &str) -> String {
    non_empty_lines(text)
        .take(NAME_SCAN_LINES)
        .filter(|line| !RESUME_HEADER_RE.is_match(line))
        .filter(|line| !EMAIL_RE.is_match(line) && !is_phone_shaped(line))
        .find(|line| looks_like_name(line))
        .map(|line| truncate_chars(line, MAX_NAME_LEN))
        .unwrap_or_default()
}

/// 2-4 capitalized words of letters, apostrophes and hyphens; 3-49 chars overall.
pub fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    if !(3..50).contains(&len) {
        return false;
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }
    words.iter().all(|word| {
        word.chars().next().is_some_and(char::is_uppercase)
            && word
                .chars()
                .all(|c| c.is_alphabetic() || c == '\'' || c == '’' || c == '-')
    })
}

/// Job title from the top of the document, else the first line of an
/// objective/summary section.
pub fn extract_role(text: &str) -> String {
    for line in non_empty_lines(text).take(ROLE_SCAN_LINES) {
        if EMAIL_RE.is_match(line) || URL_HINT_RE.is_match(line) {
            continue;
        }
        if let Some(m) = ROLE_PATTERNS.iter().find_map(|re| re.find(line)) {
            return truncate_chars(m.as_str().trim(), MAX_ROLE_LEN);
        }
    }

    extract_section(text, OBJECTIVE_HEADINGS)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| truncate_chars(line, MAX_ROLE_LEN))
        .unwrap_or_default()
}

/// Summary-like section body, else the free text above the first heading.
pub fn extract_bio(text: &str) -> String {
    let section = extract_section(text, SUMMARY_HEADINGS);
    if !section.is_empty() {
        return truncate_chars(&collapse_whitespace(&section), MAX_BIO_LEN);
    }

    let mut bio = String::new();
    for line in non_empty_lines(text).take(BIO_SCAN_LINES) {
        if is_heading_line(line) {
            break;
        }
        if is_contact_line(line) || looks_like_name(line) {
            continue;
        }
        if !bio.is_empty() {
            bio.push(' ');
        }
        bio.push_str(line);
        if bio.chars().count() > BIO_FALLBACK_TARGET_LEN {
            break;
        }
    }
    truncate_chars(&bio, MAX_BIO_LEN)
}

fn is_contact_line(line: &str) -> bool {
    EMAIL_RE.is_match(line) || is_phone_shaped(line) || URL_HINT_RE.is_match(line)
}

fn is_phone_shaped(line: &str) -> bool {
    PHONE_RE.is_match(line) || line.chars().filter(char::is_ascii_digit).count() >= 7
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "RESUME\nJane Smith\nSenior Software Engineer\njane.smith@example.com | +1 (555) 123-4567\nSan Francisco, CA";

    #[test]
    fn test_email_first_match() {
        assert_eq!(extract_email("a: jane@example.com, b: bob@corp.io"), "jane@example.com");
        assert_eq!(extract_email("no contact here"), "");
    }

    #[test]
    fn test_email_drops_trailing_period() {
        assert_eq!(extract_email("Reach me at jane@example.com."), "jane@example.com");
    }

    #[test]
    fn test_phone_us_formats() {
        assert_eq!(extract_phone("call 555-123-4567 now"), "555-123-4567");
        assert_eq!(extract_phone("(555) 123 4567"), "(555) 123 4567");
        assert_eq!(extract_phone("555.123.4567"), "555.123.4567");
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(extract_phone("tel +1 (555) 123-4567"), "+1 (555) 123-4567");
    }

    #[test]
    fn test_phone_ignores_year_ranges() {
        assert_eq!(extract_phone("2015 - 2019"), "");
    }

    #[test]
    fn test_name_skips_resume_header() {
        assert_eq!(extract_name(HEADER), "Jane Smith");
    }

    #[test]
    fn test_name_accepts_hyphen_and_apostrophe() {
        assert_eq!(extract_name("Mary-Kate O'Neil\nmk@example.com"), "Mary-Kate O'Neil");
    }

    #[test]
    fn test_name_rejects_single_word_and_lowercase() {
        assert_eq!(extract_name("Jane\njane smith\nphp developer"), "");
    }

    #[test]
    fn test_name_only_scans_first_five_lines() {
        let text = "one\ntwo\nthree\nfour\nfive\nJane Smith";
        assert_eq!(extract_name(text), "");
    }

    #[test]
    fn test_role_from_title_line() {
        assert_eq!(extract_role(HEADER), "Senior Software Engineer");
    }

    #[test]
    fn test_role_management_title() {
        assert_eq!(extract_role("John Doe\nProduct Manager at Initech"), "Product Manager");
    }

    #[test]
    fn test_role_falls_back_to_objective() {
        let text = "Jane Smith\n\nOBJECTIVE\nTo build delightful tools for gardeners.\nMore text";
        assert_eq!(extract_role(text), "To build delightful tools for gardeners.");
    }

    #[test]
    fn test_role_empty_when_nothing_matches() {
        assert_eq!(extract_role("Jane Smith\nSan Francisco"), "");
    }

    #[test]
    fn test_bio_prefers_summary_section() {
        let text = "Jane Smith\n\nSUMMARY\nBackend engineer with 5 years\nbuilding distributed systems.\n\nEXPERIENCE\nX";
        assert_eq!(
            extract_bio(text),
            "Backend engineer with 5 years building distributed systems."
        );
    }

    #[test]
    fn test_bio_summary_truncated() {
        let long = "word ".repeat(200);
        let text = format!("PROFILE\n{long}");
        assert_eq!(extract_bio(&text).chars().count(), MAX_BIO_LEN - 1);
    }

    #[test]
    fn test_bio_fallback_skips_contact_lines() {
        let text = "Jane Smith\njane@example.com\n555-123-4567\nPassionate builder of tools.\nLoves Rust.\n\nEXPERIENCE\nEngineer";
        assert_eq!(extract_bio(text), "Passionate builder of tools. Loves Rust.");
    }

    #[test]
    fn test_bio_fallback_stops_past_target_length() {
        let first = "alpha ".repeat(20);
        let second = "beta ".repeat(20);
        let third = "gamma ".repeat(5);
        let text = format!("{first}\n{second}\n{third}\n\nEXPERIENCE\nEngineer");
        let bio = extract_bio(&text);
        assert!(bio.chars().count() > BIO_FALLBACK_TARGET_LEN);
        assert!(bio.starts_with("alpha") && bio.ends_with("beta"));
        assert!(!bio.contains("gamma"));
    }

    #[test]
    fn test_bio_empty_text() {
        assert_eq!(extract_bio(""), "");
    }
}
