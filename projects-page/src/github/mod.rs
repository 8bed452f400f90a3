//! Repository data loading from the GitHub API.
//!
//! This module owns the fetch-validate-collect pipeline: each configured
//! identifier is fetched from `GET /repos/{owner}/{repo}`, validated against
//! [`RepoMetadata`], and collected per group. Invalid or unreachable
//! repositories are skipped with a diagnostic; they never abort the batch.

mod error;
mod fetch;
mod metadata;
pub mod sample;

pub use error::FetchError;
pub use fetch::RepoFetcher;
pub use metadata::RepoMetadata;

use crate::summary::FetchOutcome;

/// Validated repository records, per group, in configured order.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProjects {
    /// Personal project repositories.
    pub personal: Vec<RepoMetadata>,

    /// Open-source repositories.
    pub oss: Vec<RepoMetadata>,

    /// Per-identifier outcomes, for summary accounting.
    pub outcomes: Vec<FetchOutcome>,
}
