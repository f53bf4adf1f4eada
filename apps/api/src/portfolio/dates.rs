//! Splits a raw duration string ("Jan 2018 - Dec 2021") into start and end.

use std::sync::LazyLock;

use regex::Regex;

pub const PRESENT: &str = "Present";

static OPEN_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:present|current|now)\b").unwrap());

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// A range that opens with a month-year, e.g. "Jan 2018 - Dec 2021" or "Jan 2018 - 2021".
static MONTH_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let month = r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+(?:19|20)\d{2}";
    Regex::new(&format!(
        r"(?i)^\s*({month})(?:\s*(?:-|–|—|to)\s*(?:({month})|((?:19|20)\d{{2}})\b|present|current|now))?"
    ))
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Parses a duration in priority order: a leading month-year range, then the
/// first two bare years anywhere, then a naive split on the first dash.
/// An open-ended marker always yields "Present".
pub fn parse_duration(duration: &str) -> DateRange {
    let open_ended = OPEN_END_RE.is_match(duration);

    if let Some(caps) = MONTH_RANGE_RE.captures(duration) {
        let start = caps.get(1).map_or("", |m| m.as_str()).trim().to_string();
        let second = caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str());
        let end = end_date(open_ended, second, &start);
        return DateRange { start, end };
    }

    let mut years = YEAR_RE.find_iter(duration).map(|m| m.as_str());
    if let Some(first) = years.next() {
        let end = end_date(open_ended, years.next(), first);
        return DateRange {
            start: first.to_string(),
            end,
        };
    }

    let (left, right) = duration
        .split_once(['-', '–', '—'])
        .unwrap_or((duration, ""));
    let right = right.trim();
    let end = if open_ended || right.is_empty() {
        PRESENT.to_string()
    } else {
        right.to_string()
    };
    DateRange {
        start: left.trim().to_string(),
        end,
    }
}

/// Second date when present, else the start. Open-ended ranges end at "Present".
fn end_date(open_ended: bool, second: Option<&str>, start: &str) -> String {
    if open_ended {
        return PRESENT.to_string();
    }
    second.unwrap_or(start).trim().to_string()
}
