use serde::{Deserialize, Serialize};

/// Parser-native shape of an extracted résumé.
///
/// Scalar fields are empty strings when nothing was found; the assembler
/// replaces empties with display sentinels before the record leaves the core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub role: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// Raw date range as it appeared in the text, e.g. "Jan 2019 - Present".
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Profile links keyed by platform. Absent platforms are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl Links {
    pub fn is_empty(&self) -> bool {
        self.github.is_none()
            && self.linkedin.is_none()
            && self.twitter.is_none()
            && self.website.is_none()
            && self.portfolio.is_none()
    }
}
