//! Runs every extractor over one document and fills in display defaults.

use tracing::debug;

use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::fields::{extract_bio, extract_email, extract_name, extract_phone, extract_role};
use crate::extraction::links::extract_links;
use crate::extraction::projects::extract_projects;
use crate::extraction::skills::extract_skills;
use crate::extraction::text::normalize_text;
use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeRecord};

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_ROLE: &str = "Professional";
pub const DEFAULT_BIO: &str = "No summary found in resume. Add a short introduction about yourself.";
pub const DEFAULT_SKILLS: &[&str] = &["JavaScript", "React", "Node.js", "Python", "Git"];

pub fn placeholder_experience() -> ExperienceEntry {
    ExperienceEntry {
        title: "Your Position".to_string(),
        company: "Company Name".to_string(),
        duration: String::new(),
        description: "Describe your responsibilities and achievements.".to_string(),
    }
}

pub fn placeholder_education() -> EducationEntry {
    EducationEntry {
        degree: "Your Degree".to_string(),
        institution: "University Name".to_string(),
        field: String::new(),
        year: String::new(),
    }
}

/// Extracts a complete `ResumeRecord` from raw text. Never fails: anything
/// not found falls back to a default.
pub fn parse_resume(raw_text: &str) -> ResumeRecord {
    let text = normalize_text(raw_text);

    let record = ResumeRecord {
        name: extract_name(&text),
        email: extract_email(&text),
        phone: extract_phone(&text),
        bio: extract_bio(&text),
        role: extract_role(&text),
        experience: extract_experience(&text),
        education: extract_education(&text),
        skills: extract_skills(&text),
        projects: extract_projects(&text),
        links: extract_links(&text),
    };

    debug!(
        chars = text.len(),
        name_found = !record.name.is_empty(),
        experience = record.experience.len(),
        education = record.education.len(),
        skills = record.skills.len(),
        projects = record.projects.len(),
        links_found = !record.links.is_empty(),
        "Extracted resume sections"
    );

    apply_defaults(record)
}

fn apply_defaults(mut record: ResumeRecord) -> ResumeRecord {
    fill_if_empty(&mut record.name, DEFAULT_NAME);
    fill_if_empty(&mut record.email, DEFAULT_EMAIL);
    fill_if_empty(&mut record.role, DEFAULT_ROLE);
    fill_if_empty(&mut record.bio, DEFAULT_BIO);
    if record.experience.is_empty() {
        record.experience.push(placeholder_experience());
    }
    if record.education.is_empty() {
        record.education.push(placeholder_education());
    }
    if record.skills.is_empty() {
        record.skills = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    record
}

pub fn fill_if_empty(value: &mut String, default: &str) {
    if value.trim().is_empty() {
        *value = default.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JANE: &str = "Jane Smith
jane@example.com
555-123-4567

SUMMARY
Backend engineer with 5 years building distributed systems.

EXPERIENCE
Senior Engineer
Acme Corp
2019 - Present
Built payment infra.

EDUCATION
BS Computer Science
State University
2018

SKILLS
Go, Python, Kubernetes
";

    #[test]
    fn test_end_to_end_resume_record() {
        let record = parse_resume(JANE);
        assert_eq!(record.name, "Jane Smith");
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.phone, "555-123-4567");
        assert!(record.bio.starts_with("Backend engineer"));
        assert_eq!(
            record.experience,
            vec![ExperienceEntry {
                title: "Senior Engineer".to_string(),
                company: "Acme Corp".to_string(),
                duration: "2019 - Present".to_string(),
                description: "Built payment infra.".to_string(),
            }]
        );
        assert_eq!(
            record.education,
            vec![EducationEntry {
                degree: "BS Computer Science".to_string(),
                institution: "State University".to_string(),
                field: "Computer Science".to_string(),
                year: "2018".to_string(),
            }]
        );
        assert_eq!(record.skills, vec!["Go", "Python", "Kubernetes"]);
        assert!(record.projects.is_empty());
    }

    #[test]
    fn test_project_after_detached_bullet() {
        let text = "Jane Smith\njane@example.com\n\nPROJECTS\n•\nFolio\nA tool https://folio.example.dev\n";
        let record = parse_resume(text);
        assert_eq!(record.projects.len(), 1);
        assert_eq!(record.projects[0].name, "Folio");
    }

    #[test]
    fn test_empty_text_gets_full_defaults() {
        let record = parse_resume("");
        assert_eq!(record.name, DEFAULT_NAME);
        assert_eq!(record.email, DEFAULT_EMAIL);
        assert_eq!(record.role, DEFAULT_ROLE);
        assert_eq!(record.bio, DEFAULT_BIO);
        assert_eq!(record.phone, "");
        assert_eq!(record.experience, vec![placeholder_experience()]);
        assert_eq!(record.education, vec![placeholder_education()]);
        assert_eq!(record.skills.len(), DEFAULT_SKILLS.len());
        assert!(record.projects.is_empty());
        assert_eq!(record.links, Default::default());
    }

    #[test]
    fn test_garbage_text_does_not_panic() {
        let noise = "%%%\n\n::::\n•••\n(((\n2019 -\nEXPERIENCE\n\n\nEDUCATION\n";
        let record = parse_resume(noise);
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.education.len(), 1);
    }

    #[test]
    fn test_json_never_contains_null() {
        let json = serde_json::to_string(&parse_resume("Jane Smith")).unwrap();
        assert!(!json.contains("null"));
    }
}
