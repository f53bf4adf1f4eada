//! Section location and block segmentation shared by the multi-entry extractors.

pub const SUMMARY_HEADINGS: &[&str] = &[
    "SUMMARY",
    "PROFESSIONAL SUMMARY",
    "CAREER SUMMARY",
    "PROFILE",
    "PROFESSIONAL PROFILE",
    "OBJECTIVE",
    "CAREER OBJECTIVE",
    "ABOUT",
    "ABOUT ME",
];

pub const OBJECTIVE_HEADINGS: &[&str] = &[
    "OBJECTIVE",
    "CAREER OBJECTIVE",
    "SUMMARY",
    "PROFESSIONAL SUMMARY",
    "CAREER SUMMARY",
];

pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "PROFESSIONAL EXPERIENCE",
    "RELEVANT EXPERIENCE",
    "EMPLOYMENT",
    "EMPLOYMENT HISTORY",
    "WORK HISTORY",
    "CAREER HISTORY",
];

pub const EDUCATION_HEADINGS: &[&str] = &[
    "EDUCATION",
    "ACADEMIC BACKGROUND",
    "EDUCATIONAL BACKGROUND",
    "ACADEMICS",
    "EDUCATION AND TRAINING",
];

pub const SKILLS_HEADINGS: &[&str] = &[
    "SKILLS",
    "TECHNICAL SKILLS",
    "KEY SKILLS",
    "CORE SKILLS",
    "SKILLS & TOOLS",
    "CORE COMPETENCIES",
    "COMPETENCIES",
    "TECHNOLOGIES",
    "TECH STACK",
];

pub const PROJECTS_HEADINGS: &[&str] = &[
    "PROJECTS",
    "PERSONAL PROJECTS",
    "KEY PROJECTS",
    "SIDE PROJECTS",
    "SELECTED PROJECTS",
    "ACADEMIC PROJECTS",
    "OPEN SOURCE",
];

/// Headings with no extractor of their own. They still end the section before them.
const OTHER_HEADINGS: &[&str] = &[
    "CERTIFICATIONS",
    "CERTIFICATES",
    "AWARDS",
    "HONORS",
    "HONORS & AWARDS",
    "PUBLICATIONS",
    "LANGUAGES",
    "INTERESTS",
    "HOBBIES",
    "REFERENCES",
    "VOLUNTEER",
    "VOLUNTEER EXPERIENCE",
    "ACHIEVEMENTS",
    "ACTIVITIES",
    "LEADERSHIP",
    "CONTACT",
    "COURSEWORK",
];

/// Words that make an all-caps line read as a section heading.
const HEADING_WORDS: &[&str] = &[
    "ABOUT",
    "ACADEMIC",
    "ACADEMICS",
    "ACHIEVEMENTS",
    "ACTIVITIES",
    "AWARDS",
    "CERTIFICATES",
    "CERTIFICATIONS",
    "COMPETENCIES",
    "CONTACT",
    "COURSEWORK",
    "EDUCATION",
    "EMPLOYMENT",
    "EXPERIENCE",
    "HISTORY",
    "HOBBIES",
    "HONORS",
    "INTERESTS",
    "LANGUAGES",
    "LEADERSHIP",
    "OBJECTIVE",
    "PROFILE",
    "PROJECTS",
    "PUBLICATIONS",
    "QUALIFICATIONS",
    "REFERENCES",
    "SKILLS",
    "SUMMARY",
    "TECHNOLOGIES",
    "TRAINING",
    "VOLUNTEER",
];

const MAX_HEADING_LEN: usize = 40;

/// Returns the body of the first section introduced by one of `headings`,
/// up to the next heading-looking line. Empty when no heading matches.
pub fn extract_section(text: &str, headings: &[&str]) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = lines.iter().position(|line| matches_heading(line, headings)) else {
        return String::new();
    };

    lines[start + 1..]
        .iter()
        .take_while(|line| !is_heading_line(line))
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// True when the line is a known section heading, or an all-caps line made
/// of section words (e.g. "WORK HISTORY", "VOLUNTEER WORK").
pub fn is_heading_line(line: &str) -> bool {
    let label = heading_label(line);
    if label.is_empty() || label.chars().count() > MAX_HEADING_LEN {
        return false;
    }

    let known = [
        SUMMARY_HEADINGS,
        EXPERIENCE_HEADINGS,
        EDUCATION_HEADINGS,
        SKILLS_HEADINGS,
        PROJECTS_HEADINGS,
        OTHER_HEADINGS,
    ];
    if known
        .iter()
        .flat_map(|set| set.iter())
        .any(|h| h.eq_ignore_ascii_case(&label))
    {
        return true;
    }

    let all_caps = label.chars().any(char::is_alphabetic)
        && !label.chars().any(char::is_lowercase)
        && label
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '&' || c == '/' || c == '-');
    all_caps
        && label
            .split(|c: char| c == ' ' || c == '/' || c == '-')
            .any(|word| HEADING_WORDS.contains(&word))
}

fn matches_heading(line: &str, headings: &[&str]) -> bool {
    let label = heading_label(line);
    !label.is_empty() && headings.iter().any(|h| h.eq_ignore_ascii_case(&label))
}

/// Trims, drops a trailing colon and collapses inner whitespace.
fn heading_label(line: &str) -> String {
    line.trim()
        .trim_end_matches(':')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits section text into blank-line delimited blocks of trimmed, non-empty lines.
pub fn split_blocks(section: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in section.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Removes leading bullet glyphs and the whitespace after them.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| {
        matches!(c, '•' | '-' | '|' | '*' | '·' | '▪' | '◦' | '●' | '–' | '>') || c.is_whitespace()
    })
    .trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISOLATION: &str = "EXPERIENCE\nAcme Corp\nEngineer\n2020-2022\n\nEDUCATION\nMIT\nBS Physics";

    #[test]
    fn test_section_stops_at_next_heading() {
        let section = extract_section(ISOLATION, EXPERIENCE_HEADINGS);
        assert_eq!(section, "Acme Corp\nEngineer\n2020-2022");
        assert!(!section.contains("EDUCATION"));
        assert!(!section.contains("MIT"));
    }

    #[test]
    fn test_short_all_caps_data_line_is_not_a_boundary() {
        let section = extract_section(ISOLATION, EDUCATION_HEADINGS);
        assert_eq!(section, "MIT\nBS Physics");
    }

    #[test]
    fn test_heading_match_is_case_insensitive_with_colon() {
        let text = "Work Experience:\nEngineer at Foo\n\nSkills:\nRust";
        assert_eq!(extract_section(text, EXPERIENCE_HEADINGS), "Engineer at Foo");
        assert_eq!(extract_section(text, SKILLS_HEADINGS), "Rust");
    }

    #[test]
    fn test_missing_section_is_empty() {
        assert_eq!(extract_section("Jane Smith\njane@example.com", PROJECTS_HEADINGS), "");
        assert_eq!(extract_section("", EXPERIENCE_HEADINGS), "");
    }

    #[test]
    fn test_first_matching_heading_wins() {
        let text = "SKILLS\nGo\n\nEXPERIENCE\nDev\n\nSKILLS\nRust";
        assert_eq!(extract_section(text, SKILLS_HEADINGS), "Go");
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        assert_eq!(extract_section("PROJECTS\nfolio\nA parser", PROJECTS_HEADINGS), "folio\nA parser");
    }

    #[test]
    fn test_heading_detection() {
        assert!(is_heading_line("EDUCATION"));
        assert!(is_heading_line("  Technical Skills: "));
        assert!(is_heading_line("VOLUNTEER WORK"));
        assert!(!is_heading_line("MIT"));
        assert!(!is_heading_line("ACME CORP"));
        assert!(!is_heading_line("Senior Engineer"));
        assert!(!is_heading_line(""));
    }

    #[test]
    fn test_split_blocks_on_blank_lines() {
        let blocks = split_blocks("a\n b \n\n\nc\n   \nd\ne");
        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]]);
    }

    #[test]
    fn test_strip_bullet() {
        assert_eq!(strip_bullet("• Built things"), "Built things");
        assert_eq!(strip_bullet("- item"), "item");
        assert_eq!(strip_bullet("| piped "), "piped");
        assert_eq!(strip_bullet("plain"), "plain");
    }
}
