//! Education entries: degree, field of study, institution and year per block.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::limits::{truncate_chars, MAX_EDUCATION, MAX_FIELD_LEN};
use crate::extraction::sections::{extract_section, split_blocks, strip_bullet, EDUCATION_HEADINGS};
use crate::models::resume::EducationEntry;

const DEGREE_KEYWORD: &str = concat!(
    r"\b(?:",
    r"(?i:bachelor|master|associate)(?:'s|’s)?(?:\s+(?i:of|in)\s+(?i:applied science|science|arts|fine arts|engineering|technology|business administration|computer applications))?",
    r"|(?i:doctor)(?:ate)?(?:\s+of\s+(?i:philosophy))?",
    r"|Ph\.?\s?D\b\.?",
    r"|MBA\b",
    r"|B\.?Tech\b\.?|M\.?Tech\b\.?|B\.?Eng\b\.?|M\.?Eng\b\.?",
    r"|B\.?Sc?\b\.?|M\.?Sc?\b\.?|B\.?A\b\.?|M\.?A\b\.?|B\.?E\b\.?|M\.?E\b\.?",
    r"|(?i:diploma)",
    r")"
);

const TITLE_PHRASE: &str = r"([A-Z][A-Za-z&]*(?:[ \t]+(?:&[ \t]+|and[ \t]+)?[A-Z][A-Za-z&]*)*)";

/// Degree keyword, optional "Degree", then "in/of" or plain spacing, then a capitalized phrase.
static DEGREE_WITH_FIELD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{DEGREE_KEYWORD}(?:[ \t]+(?i:degree))?(?:[ \t]*,?[ \t]*(?i:in|of)[ \t]+|[ \t]+){TITLE_PHRASE}"
    ))
    .unwrap()
});

/// Degree keyword plus the rest of its clause.
static DEGREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{DEGREE_KEYWORD}[^,|\n]*")).unwrap());

static FIELD_PHRASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\b(?:in|of)[ \t]+{TITLE_PHRASE}")).unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static INSTITUTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy)\b").unwrap()
});

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let section = extract_section(text, EDUCATION_HEADINGS);
    if section.is_empty() {
        return Vec::new();
    }

    split_blocks(&section)
        .iter()
        .filter_map(|block| parse_education_block(block))
        .take(MAX_EDUCATION)
        .collect()
}

pub fn parse_education_block(lines: &[&str]) -> Option<EducationEntry> {
    let lines: Vec<&str> = lines
        .iter()
        .map(|line| strip_bullet(line))
        .filter(|line| !line.is_empty())
        .collect();
    let first = *lines.first()?;

    // Graduation year is the latest-listed one ("2014 - 2018" graduates in 2018).
    let year = lines
        .iter()
        .flat_map(|line| YEAR_RE.find_iter(line))
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let (degree, field, degree_line) = match find_degree(&lines) {
        Some(found) => found,
        None => (first.to_string(), String::new(), 0),
    };

    let institution = lines
        .iter()
        .find(|line| INSTITUTION_RE.is_match(line))
        .map(|line| institution_segment(line))
        .or_else(|| {
            lines
                .get(1)
                .filter(|_| degree_line != 1)
                .filter(|line| !is_year_only(line))
                .map(|line| line.to_string())
        })
        .unwrap_or_default();

    Some(EducationEntry {
        degree: truncate_chars(degree.trim(), MAX_FIELD_LEN),
        institution: truncate_chars(institution.trim(), MAX_FIELD_LEN),
        field: truncate_chars(field.trim(), MAX_FIELD_LEN),
        year,
    })
}

/// Returns (degree, field, line index) for the first line naming a degree.
fn find_degree(lines: &[&str]) -> Option<(String, String, usize)> {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = DEGREE_WITH_FIELD_RE.captures(line) {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let phrase = caps.get(1).map_or("", |m| m.as_str());
            if !INSTITUTION_RE.is_match(phrase) {
                return Some((whole.to_string(), phrase.to_string(), idx));
            }
        }
        if let Some(m) = DEGREE_RE.find(line) {
            let degree = strip_trailing_year(m.as_str());
            let field = field_from_phrase(&degree).unwrap_or_default();
            return Some((degree, field, idx));
        }
    }
    None
}

/// "in/of Capitalized Phrase" inside a degree string, e.g. "Master of Physics" → "Physics".
pub fn field_from_phrase(degree: &str) -> Option<String> {
    FIELD_PHRASE_RE
        .captures_iter(degree)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .last()
}

fn strip_trailing_year(degree: &str) -> String {
    match YEAR_RE.find(degree) {
        Some(m) => degree[..m.start()]
            .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '–' | '(' | ','))
            .to_string(),
        None => degree.trim().to_string(),
    }
}

/// From "BS Physics, State University, 2018" keeps "State University".
fn institution_segment(line: &str) -> String {
    line.split([',', '|'])
        .map(str::trim)
        .find(|segment| INSTITUTION_RE.is_match(segment))
        .unwrap_or(line)
        .to_string()
}

fn is_year_only(line: &str) -> bool {
    YEAR_RE.is_match(line) && !line.chars().any(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviated_degree_with_field() {
        let entry = parse_education_block(&["BS Computer Science", "State University", "2018"]).unwrap();
        assert_eq!(entry.degree, "BS Computer Science");
        assert_eq!(entry.field, "Computer Science");
        assert_eq!(entry.institution, "State University");
        assert_eq!(entry.year, "2018");
    }

    #[test]
    fn test_long_form_degree() {
        let entry = parse_education_block(&[
            "Massachusetts Institute of Technology",
            "Bachelor of Science in Electrical Engineering, 2012 - 2016",
        ])
        .unwrap();
        assert_eq!(entry.degree, "Bachelor of Science in Electrical Engineering");
        assert_eq!(entry.field, "Electrical Engineering");
        assert_eq!(entry.institution, "Massachusetts Institute of Technology");
        assert_eq!(entry.year, "2016");
    }

    #[test]
    fn test_degree_without_field() {
        let entry = parse_education_block(&["MBA, Harvard Business School", "2015"]).unwrap();
        assert_eq!(entry.degree, "MBA");
        assert_eq!(entry.field, "");
        assert_eq!(entry.institution, "Harvard Business School");
        assert_eq!(entry.year, "2015");
    }

    #[test]
    fn test_dotted_abbreviation() {
        let entry = parse_education_block(&["M.S. in Data Science", "Stanford University"]).unwrap();
        assert_eq!(entry.field, "Data Science");
        assert_eq!(entry.year, "");
    }

    #[test]
    fn test_no_degree_keyword_uses_first_line() {
        let entry = parse_education_block(&["Coding Bootcamp Certificate", "Hack Reactor", "2017"]).unwrap();
        assert_eq!(entry.degree, "Coding Bootcamp Certificate");
        assert_eq!(entry.institution, "Hack Reactor");
        assert_eq!(entry.field, "");
    }

    #[test]
    fn test_fallback_institution_skips_year_line() {
        let entry = parse_education_block(&["Self-directed study", "2019"]).unwrap();
        assert_eq!(entry.institution, "");
        assert_eq!(entry.year, "2019");
    }

    #[test]
    fn test_field_from_phrase() {
        assert_eq!(field_from_phrase("Master of Physics").as_deref(), Some("Physics"));
        assert_eq!(field_from_phrase("BS"), None);
    }

    #[test]
    fn test_section_capped_at_five() {
        let mut text = String::from("EDUCATION\n");
        for i in 0..8 {
            text.push_str(&format!("BA History\nCollege {i}\n\n"));
        }
        assert_eq!(extract_education(&text).len(), MAX_EDUCATION);
    }
}
