//! Pure mapping from the parser-native `ResumeRecord` to the template-facing
//! `PortfolioRecord`.

use crate::extraction::education::field_from_phrase;
use crate::models::portfolio::{
    PortfolioEducation, PortfolioExperience, PortfolioProject, PortfolioRecord,
};
use crate::models::resume::{EducationEntry, ExperienceEntry, Links, ProjectEntry, ResumeRecord};
use crate::portfolio::dates::parse_duration;

/// Assumed program length when deriving an education start year.
// TODO: vary by degree level once Master's/PhD programs are distinguished.
const ASSUMED_PROGRAM_YEARS: i32 = 4;

/// Degree abbreviations checked in order; the first one present names the field.
const DEGREE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("CS", "Computer Science"),
    ("EE", "Electrical Engineering"),
    ("ME", "Mechanical Engineering"),
    ("CE", "Computer Engineering"),
    ("MBA", "Business Administration"),
    ("BA", "Arts"),
    ("BS", "Science"),
    ("BSC", "Science"),
    ("MA", "Arts"),
    ("MS", "Science"),
    ("MSC", "Science"),
];

pub fn transform_resume(resume: &ResumeRecord) -> PortfolioRecord {
    PortfolioRecord {
        name: resume.name.clone(),
        email: resume.email.clone(),
        phone: resume.phone.clone(),
        location: String::new(),
        bio: resume.bio.clone(),
        role: resume.role.clone(),
        skills: resume.skills.clone(),
        experience: resume.experience.iter().map(transform_experience).collect(),
        education: resume.education.iter().map(transform_education).collect(),
        projects: resume.projects.iter().map(transform_project).collect(),
        certifications: Vec::new(),
        links: alias_links(&resume.links),
    }
}

pub fn transform_experience(entry: &ExperienceEntry) -> PortfolioExperience {
    let range = parse_duration(&entry.duration);
    PortfolioExperience {
        company: entry.company.clone(),
        position: entry.title.clone(),
        start_date: range.start,
        end_date: range.end,
        description: entry.description.clone(),
        highlights: Vec::new(),
    }
}

pub fn transform_education(entry: &EducationEntry) -> PortfolioEducation {
    let year = entry.year.trim();
    let start_date = year
        .parse::<i32>()
        .map(|y| (y - ASSUMED_PROGRAM_YEARS).to_string())
        .unwrap_or_default();

    let field = if entry.field.trim().is_empty() {
        infer_field(&entry.degree)
    } else {
        entry.field.clone()
    };

    PortfolioEducation {
        school: entry.institution.clone(),
        degree: entry.degree.clone(),
        field,
        start_date,
        end_date: year.to_string(),
    }
}

fn transform_project(project: &ProjectEntry) -> PortfolioProject {
    PortfolioProject {
        name: project.name.clone(),
        description: project.description.clone(),
        technologies: project.technologies.clone(),
        url: project.url.clone(),
        github: project.github.clone(),
    }
}

/// Field of study from the degree string: "in/of Phrase" first, then a known abbreviation.
pub fn infer_field(degree: &str) -> String {
    if let Some(field) = field_from_phrase(degree) {
        return field;
    }

    let tokens: Vec<String> = degree
        .replace('.', "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_uppercase)
        .collect();

    DEGREE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| tokens.iter().any(|t| t == abbr))
        .map(|(_, field)| field.to_string())
        .unwrap_or_default()
}

/// Website and portfolio stand in for each other when only one is known.
fn alias_links(links: &Links) -> Links {
    let mut aliased = links.clone();
    if aliased.website.is_none() {
        aliased.website = links.portfolio.clone();
    }
    if aliased.portfolio.is_none() {
        aliased.portfolio = links.website.clone();
    }
    aliased
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::assembler::parse_resume;

    const JANE: &str = "Jane Smith\njane@example.com\n555-123-4567\n\nSUMMARY\nBackend engineer with 5 years building distributed systems.\n\nEXPERIENCE\nSenior Engineer\nAcme Corp\n2019 - Present\nBuilt payment infra.\n\nEDUCATION\nBS Computer Science\nState University\n2018\n\nSKILLS\nGo, Python, Kubernetes\n";

    #[test]
    fn test_end_to_end_portfolio_record() {
        let portfolio = transform_resume(&parse_resume(JANE));
        let job = &portfolio.experience[0];
        assert_eq!(job.position, "Senior Engineer");
        assert_eq!(job.company, "Acme Corp");
        assert_eq!(job.start_date, "2019");
        assert_eq!(job.end_date, "Present");
        assert!(job.highlights.is_empty());

        let school = &portfolio.education[0];
        assert_eq!(school.school, "State University");
        assert_eq!(school.start_date, "2014");
        assert_eq!(school.end_date, "2018");
        assert_eq!(school.field, "Computer Science");
        assert!(portfolio.certifications.is_empty());
    }

    #[test]
    fn test_transform_is_idempotent() {
        let resume = parse_resume(JANE);
        assert_eq!(transform_resume(&resume), transform_resume(&resume));
    }

    #[test]
    fn test_camel_case_json_shape() {
        let json = serde_json::to_value(transform_resume(&parse_resume(JANE))).unwrap();
        assert_eq!(json["experience"][0]["startDate"], "2019");
        assert_eq!(json["education"][0]["endDate"], "2018");
        assert!(json["certifications"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_education_without_year() {
        let entry = EducationEntry {
            degree: "Your Degree".to_string(),
            ..Default::default()
        };
        let edu = transform_education(&entry);
        assert_eq!(edu.start_date, "");
        assert_eq!(edu.end_date, "");
    }

    #[test]
    fn test_field_inferred_from_phrase_then_abbreviation() {
        assert_eq!(infer_field("Master of Physics"), "Physics");
        assert_eq!(infer_field("B.S. CS"), "Computer Science");
        assert_eq!(infer_field("mba"), "Business Administration");
        assert_eq!(infer_field("B.A."), "Arts");
        assert_eq!(infer_field("Certificate"), "");
    }

    #[test]
    fn test_explicit_field_is_kept() {
        let entry = EducationEntry {
            degree: "BS".to_string(),
            field: "Biology".to_string(),
            year: "2010".to_string(),
            ..Default::default()
        };
        assert_eq!(transform_education(&entry).field, "Biology");
    }

    #[test]
    fn test_website_and_portfolio_alias() {
        let only_portfolio = Links {
            portfolio: Some("https://jane.design".to_string()),
            ..Default::default()
        };
        let aliased = alias_links(&only_portfolio);
        assert_eq!(aliased.website.as_deref(), Some("https://jane.design"));

        let both = Links {
            website: Some("https://a.dev".to_string()),
            portfolio: Some("https://b.dev".to_string()),
            ..Default::default()
        };
        assert_eq!(alias_links(&both), both);
    }
}
