//! Work experience: one entry per blank-line block of the experience section.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::limits::{
    truncate_chars, MAX_EXPERIENCE, MAX_EXPERIENCE_DESC_LEN, MAX_FIELD_LEN,
};
use crate::extraction::sections::{
    extract_section, split_blocks, strip_bullet, EXPERIENCE_HEADINGS,
};
use crate::models::resume::ExperienceEntry;

const MONTH: &str = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?";
const RANGE_SEP: &str = r"\s*(?:-|–|—|to)\s*";
const OPEN_END: &str = r"(?:present|current|now)";

/// Date-range patterns in priority order: month-year, bare year, MM/YYYY.
static DATE_RANGE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    let year = r"(?:19|20)\d{2}";
    [
        format!(r"(?i)\b{MONTH}\s+{year}{RANGE_SEP}(?:{MONTH}\s+{year}|{OPEN_END})\b"),
        format!(r"(?i)\b{year}{RANGE_SEP}(?:{year}|{OPEN_END})\b"),
        format!(r"(?i)\b\d{{1,2}}/{year}{RANGE_SEP}(?:\d{{1,2}}/{year}|{OPEN_END})\b"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Title and company are looked for only among this many leading lines.
const HEADER_LINES: usize = 3;
const DESCRIPTION_JOINER: &str = " • ";

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let section = extract_section(text, EXPERIENCE_HEADINGS);
    if section.is_empty() {
        return Vec::new();
    }

    split_blocks(&section)
        .iter()
        .filter_map(|block| parse_experience_block(block))
        .take(MAX_EXPERIENCE)
        .collect()
}

/// Parses one job block. Returns `None` when no title can be found.
pub fn parse_experience_block(lines: &[&str]) -> Option<ExperienceEntry> {
    let (duration, date_line) = match find_date_range(lines) {
        Some((duration, line_idx, remainder)) => (duration, Some((line_idx, remainder))),
        None => (String::new(), None),
    };

    // The matched range is taken out of its line; whatever is left stays a candidate.
    let candidates: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| match &date_line {
            Some((date_idx, remainder)) if *date_idx == idx => {
                (!remainder.is_empty()).then_some(remainder.as_str())
            }
            _ => Some(*line),
        })
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .collect();

    let title = *candidates.first()?;

    let company_idx = candidates
        .iter()
        .take(HEADER_LINES)
        .skip(1)
        .position(|line| !line.eq_ignore_ascii_case(title))
        .map(|pos| pos + 1);
    let company = company_idx.map(|idx| candidates[idx]).unwrap_or_default();
    let body_start = company_idx.map_or(1, |idx| idx + 1);

    let description = candidates[body_start..]
        .iter()
        .filter(|line| !line.eq_ignore_ascii_case(title))
        .copied()
        .collect::<Vec<_>>()
        .join(DESCRIPTION_JOINER);

    Some(ExperienceEntry {
        title: truncate_chars(title, MAX_FIELD_LEN),
        company: truncate_chars(company, MAX_FIELD_LEN),
        duration,
        description: truncate_chars(&description, MAX_EXPERIENCE_DESC_LEN),
    })
}

/// Finds the first date range using the highest-priority pattern that matches
/// anywhere in the block. Returns the range, its line index and the line text
/// with the range removed.
fn find_date_range(lines: &[&str]) -> Option<(String, usize, String)> {
    DATE_RANGE_PATTERNS.iter().find_map(|re| {
        lines.iter().enumerate().find_map(|(idx, line)| {
            re.find(line).map(|m| {
                let remainder = format!("{} {}", &line[..m.start()], &line[m.end()..]);
                (m.as_str().trim().to_string(), idx, trim_separators(&remainder))
            })
        })
    })
}

fn trim_separators(text: &str) -> String {
    text.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | ',' | '-' | '–' | '—' | '(' | ')' | '·' | '•')
    })
    .to_string()
}
