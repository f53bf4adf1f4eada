//! Project entries: name, links, technologies and description per block.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::limits::{
    truncate_chars, MAX_NAME_LEN, MAX_PROJECTS, MAX_PROJECT_DESC_LEN, MAX_TECH_LEN,
};
use crate::extraction::links::normalize_url;
use crate::extraction::sections::{extract_section, split_blocks, strip_bullet, PROJECTS_HEADINGS};
use crate::models::resume::ProjectEntry;

static GITHUB_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?\bgithub\.com/[A-Za-z0-9_.-]+(?:/[A-Za-z0-9_.-]+)?").unwrap()
});

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://[^\s,;|()<>\[\]]+").unwrap());

static TECH_LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:[•*|-][ \t]*)?(?:technologies|technology|tech stack|tech|built with|using|stack|tools)[ \t]*:[ \t]*(.+)$").unwrap()
});

static PAREN_LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()]+)\)").unwrap());

/// Names that mark a parenthesized list as a technology list.
const TECH_KEYWORDS: &[&str] = &[
    "angular", "aws", "azure", "c#", "c++", "css", "django", "docker", "express", "fastapi",
    "firebase", "flask", "flutter", "gcp", "git", "go", "golang", "graphql", "html", "java",
    "javascript", "kafka", "kotlin", "kubernetes", "linux", "mongodb", "mysql", "next.js",
    "node", "node.js", "numpy", "pandas", "php", "postgres", "postgresql", "python", "pytorch",
    "rails", "react", "redis", "ruby", "rust", "scala", "spring", "sql", "sqlite", "svelte",
    "swift", "tailwind", "tensorflow", "terraform", "typescript", "vue",
];

const TECH_SEPARATORS: [char; 4] = [',', ';', '|', '&'];

pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    let section = extract_section(text, PROJECTS_HEADINGS);
    if section.is_empty() {
        return Vec::new();
    }

    split_blocks(&section)
        .iter()
        .filter_map(|block| parse_project_block(block))
        .take(MAX_PROJECTS)
        .collect()
}

pub fn parse_project_block(lines: &[&str]) -> Option<ProjectEntry> {
    // A bullet glyph can land on its own line in extracted PDF text
    let name_idx = lines.iter().position(|line| !strip_bullet(line).is_empty())?;
    let name = strip_bullet(lines[name_idx]);
    let block = lines.join("\n");

    let github_raw = GITHUB_URL_RE.find(&block).map(|m| m.as_str());
    let url_raw = URL_RE
        .find_iter(&block)
        .map(|m| m.as_str())
        .find(|url| !url.to_lowercase().contains("github.com"));

    let description = lines[name_idx + 1..]
        .iter()
        .filter(|line| !TECH_LABEL_RE.is_match(line))
        .filter(|line| !github_raw.is_some_and(|g| line.contains(g)))
        .filter(|line| !url_raw.is_some_and(|u| line.contains(u)))
        .map(|line| strip_bullet(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    Some(ProjectEntry {
        name: truncate_chars(name, MAX_NAME_LEN),
        description: truncate_chars(&description, MAX_PROJECT_DESC_LEN),
        technologies: extract_technologies(&block),
        url: url_raw.map(|u| u.trim_end_matches(['.', ',']).to_string()),
        github: github_raw.map(normalize_url),
    })
}

/// Pools labelled "Technologies: ..." lists and parenthesized lists that
/// name at least one known technology.
fn extract_technologies(block: &str) -> Vec<String> {
    let labelled = TECH_LABEL_RE
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str());
    let parenthesized = PAREN_LIST_RE
        .captures_iter(block)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|list| mentions_known_tech(list));

    let mut seen = HashSet::new();
    labelled
        .chain(parenthesized)
        .flat_map(|list| list.split(TECH_SEPARATORS))
        .map(|tech| tech.trim().trim_end_matches('.').trim())
        .filter(|tech| (1..MAX_TECH_LEN).contains(&tech.chars().count()))
        .filter(|tech| seen.insert(tech.to_lowercase()))
        .map(String::from)
        .collect()
}

fn mentions_known_tech(list: &str) -> bool {
    list.split(|c: char| TECH_SEPARATORS.contains(&c) || c == '/' || c.is_whitespace())
        .map(|token| token.trim().to_lowercase())
        .any(|token| TECH_KEYWORDS.contains(&token.as_str()))
}
