use serde::{Deserialize, Serialize};

use crate::models::resume::Links;

/// Template-facing record. This is also the JSON shape the LLM extraction
/// path is asked to produce, so every field tolerates being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub bio: String,
    pub role: String,
    pub skills: Vec<String>,
    pub experience: Vec<PortfolioExperience>,
    pub education: Vec<PortfolioEducation>,
    pub projects: Vec<PortfolioProject>,
    pub certifications: Vec<Certification>,
    pub links: Links,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioEducation {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioProject {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Partial user edits applied on top of a `PortfolioRecord`.
/// `None` leaves the original value untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub role: Option<String>,
    pub skills: Option<Vec<String>>,
    pub experience: Option<Vec<PortfolioExperience>>,
    pub education: Option<Vec<PortfolioEducation>>,
    pub projects: Option<Vec<PortfolioProject>>,
    pub certifications: Option<Vec<Certification>>,
    pub links: Option<Links>,
}
