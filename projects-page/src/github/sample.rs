//! Development-mode sample records.
//!
//! Development builds bypass the network entirely and use this fixed set of
//! hand-authored records, so iterating on the page locally never burns the
//! GitHub API rate limit.

use super::{LoadedProjects, RepoMetadata};
use crate::config::{RepoEntry, RepoId, RepoStatus};
use crate::summary::FetchOutcome;
use url::Url;

fn sample(
    name: &str,
    full_name: &str,
    description: &str,
    html_url: &str,
    homepage: &str,
    stargazers_count: u64,
) -> RepoMetadata {
    RepoMetadata {
        name: name.to_string(),
        full_name: full_name.to_string(),
        description: description.to_string(),
        html_url: Url::parse(html_url).expect("static sample URL"),
        homepage: Some(homepage.to_string()),
        language: "TypeScript".to_string(),
        stargazers_count,
    }
}

/// Returns the deterministic development-mode sample set.
///
/// The set is non-empty and identical on every call; no network I/O happens.
#[must_use]
pub fn sample_projects() -> LoadedProjects {
    let personal = vec![
        sample(
            "stocks",
            "juliusmarminge/stocks",
            "A stock market simulator",
            "https://github.com/juliusmarminge/stocks",
            "https://stocks.jumr.dev",
            42069,
        ),
        sample(
            "pathfinding-visualizer",
            "juliusmarminge/pathfinding-visualizer",
            "A pathfinding visualizer",
            "https://github.com/juliusmarminge/pathfinding-visualizer",
            "https://pfv.jumr.dev",
            19,
        ),
        sample(
            "sorting-visualizer",
            "juliusmarminge/sorting-visualizer",
            "A sorting visualizer",
            "https://github.com/juliusmarminge/sorting-visualizer",
            "https://sv.jumr.dev",
            0,
        ),
    ];

    let outcomes = personal
        .iter()
        .map(|metadata| FetchOutcome::Validated {
            repository: metadata.full_name.clone(),
        })
        .collect();

    LoadedProjects {
        personal,
        oss: Vec::new(),
        outcomes,
    }
}

/// Preview bindings for the sample records.
///
/// Each fixture carries its own binding, so development builds never depend
/// on the user's config listing the sample identifiers.
#[must_use]
pub fn sample_bindings() -> Vec<RepoEntry> {
    vec![
        RepoEntry {
            repo: RepoId::new("juliusmarminge", "stocks"),
            preview: "images/stocks.png".to_string(),
            status: Some(RepoStatus::InProgress),
        },
        RepoEntry {
            repo: RepoId::new("juliusmarminge", "pathfinding-visualizer"),
            preview: "images/pfv.png".to_string(),
            status: None,
        },
        RepoEntry {
            repo: RepoId::new("juliusmarminge", "sorting-visualizer"),
            preview: "images/sv.png".to_string(),
            status: None,
        },
    ]
}
