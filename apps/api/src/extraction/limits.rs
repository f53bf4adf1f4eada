//! Length and count caps applied throughout extraction.
//! They bound how much text a pathological match can swallow.

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_ROLE_LEN: usize = 99;
pub const MAX_BIO_LEN: usize = 500;
/// Once the fallback bio exceeds this many characters, stop collecting lines.
pub const BIO_FALLBACK_TARGET_LEN: usize = 200;
pub const MAX_EXPERIENCE_DESC_LEN: usize = 500;
pub const MAX_PROJECT_DESC_LEN: usize = 400;
pub const MAX_FIELD_LEN: usize = 150;

pub const MAX_SKILLS: usize = 50;
pub const MAX_EXPERIENCE: usize = 15;
pub const MAX_EDUCATION: usize = 5;
pub const MAX_PROJECTS: usize = 20;

/// Skill tokens must be at least this long...
pub const MIN_SKILL_LEN: usize = 2;
/// ...and strictly shorter than this.
pub const MAX_SKILL_LEN: usize = 50;
/// Project technology tokens must be strictly shorter than this.
pub const MAX_TECH_LEN: usize = 30;

pub const NAME_SCAN_LINES: usize = 5;
pub const ROLE_SCAN_LINES: usize = 10;
pub const BIO_SCAN_LINES: usize = 15;

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("résumé résumé", 6), "résumé");
    }
}
