//! Presentation projection.
//!
//! Pure mapping from validated repository records (plus their static preview
//! bindings and status tags) into display-card descriptors. No I/O happens
//! here; the only failure mode is a record without a preview binding, which
//! is fatal.

mod error;

pub use error::CardError;

use crate::config::RepoEntry;
use crate::github::RepoMetadata;
use serde::Serialize;
use std::collections::HashMap;

/// A display card, ready to feed into the page template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    /// Card title (the repository name).
    pub title: String,

    /// Full "owner/name" identifier.
    pub full_name: String,

    /// Repository description.
    pub description: String,

    /// Star count.
    pub stars: u64,

    /// Primary programming language.
    pub language: String,

    /// Icon class for the language, if recognized.
    pub language_icon: Option<&'static str>,

    /// Link target: homepage when valid, else the repository URL.
    pub link: String,

    /// GitHub URL of the repository.
    pub repo_url: String,

    /// Preview image asset path.
    pub preview: String,

    /// Status tag label, if any.
    pub status: Option<&'static str>,
}

/// Returns the icon class for a language, or `None` when unrecognized.
#[must_use]
pub fn language_icon(language: &str) -> Option<&'static str> {
    match language.to_lowercase().as_str() {
        "typescript" => Some("si-typescript"),
        "javascript" => Some("si-javascript"),
        "rust" => Some("si-rust"),
        "python" => Some("si-python"),
        "go" => Some("si-go"),
        _ => None,
    }
}

/// Projects validated records into cards, preserving input order.
///
/// Each record is merged with its static preview binding and status tag from
/// `preview_table` (keyed by full name).
///
/// # Errors
///
/// Returns [`CardError::MissingPreviewBinding`] if any record has no entry in
/// the table. Nothing is rendered in that case.
pub fn project_cards(
    records: &[RepoMetadata],
    preview_table: &HashMap<String, &RepoEntry>,
) -> Result<Vec<ProjectCard>, CardError> {
    records
        .iter()
        .map(|metadata| {
            let entry = preview_table.get(&metadata.full_name).ok_or_else(|| {
                CardError::MissingPreviewBinding {
                    full_name: metadata.full_name.clone(),
                }
            })?;

            Ok(ProjectCard {
                title: metadata.name.clone(),
                full_name: metadata.full_name.clone(),
                description: metadata.description.clone(),
                stars: metadata.stargazers_count,
                language: metadata.language.clone(),
                language_icon: language_icon(&metadata.language),
                link: metadata.link_target().to_string(),
                repo_url: metadata.html_url.to_string(),
                preview: entry.preview.clone(),
                status: entry.status.map(|s| s.label()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RepoId, RepoStatus};
    use url::Url;

    fn metadata(full_name: &str, stars: u64) -> RepoMetadata {
        let name = full_name.split('/').next_back().unwrap().to_string();
        RepoMetadata {
            name,
            full_name: full_name.to_string(),
            description: "A test repository".to_string(),
            html_url: Url::parse(&format!("https://github.com/{full_name}")).unwrap(),
            homepage: Some(String::new()),
            language: "TypeScript".to_string(),
            stargazers_count: stars,
        }
    }

    fn entry(full_name: &str, status: Option<RepoStatus>) -> RepoEntry {
        RepoEntry {
            repo: full_name.parse::<RepoId>().unwrap(),
            preview: format!("images/{}.png", full_name.replace('/', "-")),
            status,
        }
    }

    fn table(entries: &[RepoEntry]) -> HashMap<String, &RepoEntry> {
        entries
            .iter()
            .map(|e| (e.repo.full_name(), e))
            .collect()
    }

    #[test]
    fn projection_merges_binding_and_status() {
        let records = vec![metadata("juliusmarminge/stocks", 42)];
        let entries = vec![entry("juliusmarminge/stocks", Some(RepoStatus::InProgress))];

        let cards = project_cards(&records, &table(&entries)).unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "stocks");
        assert_eq!(cards[0].stars, 42);
        assert_eq!(cards[0].preview, "images/juliusmarminge-stocks.png");
        assert_eq!(cards[0].status, Some("In Progress"));
    }

    #[test]
    fn projection_preserves_record_order() {
        let records = vec![
            metadata("a/one", 1),
            metadata("a/two", 2),
            metadata("a/three", 3),
        ];
        let entries = vec![
            entry("a/one", None),
            entry("a/two", None),
            entry("a/three", None),
        ];

        let cards = project_cards(&records, &table(&entries)).unwrap();

        let names: Vec<_> = cards.iter().map(|c| c.full_name.as_str()).collect();
        assert_eq!(names, ["a/one", "a/two", "a/three"]);
    }

    #[test]
    fn missing_binding_is_fatal() {
        let records = vec![metadata("a/one", 1), metadata("a/unbound", 2)];
        let entries = vec![entry("a/one", None)];

        let result = project_cards(&records, &table(&entries));

        assert!(matches!(
            result,
            Err(CardError::MissingPreviewBinding { ref full_name }) if full_name == "a/unbound"
        ));
    }

    #[test]
    fn empty_homepage_links_to_repo_url() {
        let records = vec![metadata("trpc/trpc", 30000)];
        let entries = vec![entry("trpc/trpc", None)];

        let cards = project_cards(&records, &table(&entries)).unwrap();

        assert_eq!(cards[0].link, "https://github.com/trpc/trpc");
        assert_eq!(cards[0].language_icon, Some("si-typescript"));
    }

    #[test]
    fn known_language_icons() {
        assert_eq!(language_icon("TypeScript"), Some("si-typescript"));
        assert_eq!(language_icon("rust"), Some("si-rust"));
        assert_eq!(language_icon("Go"), Some("si-go"));
    }

    #[test]
    fn unknown_language_has_no_icon() {
        assert_eq!(language_icon("Brainfuck"), None);
        assert_eq!(language_icon(""), None);
    }
}
