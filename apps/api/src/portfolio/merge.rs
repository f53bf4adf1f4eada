use crate::models::portfolio::{PortfolioRecord, PortfolioUpdate};
use crate::models::resume::Links;

/// Applies user edits over a portfolio. Top-level fields are replaced wholesale;
/// `links` merge key by key so an edit to one profile keeps the others.
/// An absent or `null` link keeps the original; an empty string clears it.
pub fn merge_portfolio(original: PortfolioRecord, updates: PortfolioUpdate) -> PortfolioRecord {
    let PortfolioUpdate {
        name,
        email,
        phone,
        location,
        bio,
        role,
        skills,
        experience,
        education,
        projects,
        certifications,
        links,
    } = updates;

    PortfolioRecord {
        name: name.unwrap_or(original.name),
        email: email.unwrap_or(original.email),
        phone: phone.unwrap_or(original.phone),
        location: location.unwrap_or(original.location),
        bio: bio.unwrap_or(original.bio),
        role: role.unwrap_or(original.role),
        skills: skills.unwrap_or(original.skills),
        experience: experience.unwrap_or(original.experience),
        education: education.unwrap_or(original.education),
        projects: projects.unwrap_or(original.projects),
        certifications: certifications.unwrap_or(original.certifications),
        links: match links {
            Some(edits) => merge_links(original.links, edits),
            None => original.links,
        },
    }
}

fn merge_links(original: Links, edits: Links) -> Links {
    Links {
        github: merge_link(original.github, edits.github),
        linkedin: merge_link(original.linkedin, edits.linkedin),
        twitter: merge_link(original.twitter, edits.twitter),
        website: merge_link(original.website, edits.website),
        portfolio: merge_link(original.portfolio, edits.portfolio),
    }
}

fn merge_link(original: Option<String>, edit: Option<String>) -> Option<String> {
    match edit {
        Some(url) if url.trim().is_empty() => None,
        Some(url) => Some(url),
        None => original,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::Certification;

    fn original() -> PortfolioRecord {
        PortfolioRecord {
            name: "Jane Smith".to_string(),
            role: "Backend Engineer".to_string(),
            skills: vec!["Go".to_string(), "Python".to_string()],
            links: Links {
                github: Some("https://github.com/jane".to_string()),
                linkedin: Some("https://linkedin.com/in/jane".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_update_is_identity() {
        assert_eq!(merge_portfolio(original(), PortfolioUpdate::default()), original());
    }

    #[test]
    fn test_top_level_fields_replace_wholesale() {
        let updates = PortfolioUpdate {
            role: Some("Staff Engineer".to_string()),
            skills: Some(vec!["Rust".to_string()]),
            certifications: Some(vec![Certification {
                name: "CKA".to_string(),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let merged = merge_portfolio(original(), updates);
        assert_eq!(merged.name, "Jane Smith");
        assert_eq!(merged.role, "Staff Engineer");
        assert_eq!(merged.skills, vec!["Rust"]);
        assert_eq!(merged.certifications.len(), 1);
    }

    #[test]
    fn test_links_merge_per_key() {
        let updates = PortfolioUpdate {
            links: Some(Links {
                github: Some("https://github.com/jsmith".to_string()),
                website: Some("https://jane.dev".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let links = merge_portfolio(original(), updates).links;
        assert_eq!(links.github.as_deref(), Some("https://github.com/jsmith"));
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/jane"));
        assert_eq!(links.website.as_deref(), Some("https://jane.dev"));
        assert!(links.twitter.is_none());
    }

    #[test]
    fn test_empty_link_clears_and_null_keeps() {
        let updates: PortfolioUpdate =
            serde_json::from_str(r#"{"links": {"github": "", "linkedin": null}}"#).unwrap();
        let links = merge_portfolio(original(), updates).links;
        assert!(links.github.is_none());
        assert_eq!(links.linkedin.as_deref(), Some("https://linkedin.com/in/jane"));
    }

    #[test]
    fn test_update_deserializes_from_partial_json() {
        let updates: PortfolioUpdate =
            serde_json::from_str(r#"{"bio": "Hi", "links": {"twitter": "https://x.com/j"}}"#).unwrap();
        let merged = merge_portfolio(original(), updates);
        assert_eq!(merged.bio, "Hi");
        assert_eq!(merged.links.twitter.as_deref(), Some("https://x.com/j"));
        assert!(merged.links.github.is_some());
    }
}
