//! Repository metadata loader.
//!
//! Fetches each configured repository's public metadata from the GitHub REST
//! API and validates it. A failing repository (network error, non-2xx
//! response, malformed body, schema mismatch) is skipped and logged; it never
//! aborts the batch.

use super::{FetchError, LoadedProjects, RepoMetadata};
use crate::config::{RepoEntry, RepoId, SiteConfig};
use crate::summary::FetchOutcome;
use futures::stream::{self, StreamExt};
use octocrab::Octocrab;
use tracing::{debug, error, info, info_span, Instrument};

/// octocrab-backed loader for repository metadata.
pub struct RepoFetcher {
    octocrab: Octocrab,
    concurrency: usize,
}

impl RepoFetcher {
    /// Creates a loader issuing at most `concurrency` requests at a time.
    #[must_use]
    pub fn new(octocrab: Octocrab, concurrency: usize) -> Self {
        Self {
            octocrab,
            concurrency: concurrency.max(1),
        }
    }

    /// Loads both repository groups, preserving configured order per group.
    pub async fn load_projects(&self, config: &SiteConfig) -> LoadedProjects {
        let mut outcomes = Vec::with_capacity(config.repo_count());
        let personal = self
            .fetch_group("personal", &config.personal, &mut outcomes)
            .await;
        let oss = self.fetch_group("oss", &config.oss, &mut outcomes).await;

        LoadedProjects {
            personal,
            oss,
            outcomes,
        }
    }

    /// Fetches one group of repositories concurrently.
    ///
    /// `buffered` (rather than `buffer_unordered`) keeps the results in input
    /// order regardless of fetch completion order.
    async fn fetch_group(
        &self,
        group: &str,
        entries: &[RepoEntry],
        outcomes: &mut Vec<FetchOutcome>,
    ) -> Vec<RepoMetadata> {
        let span = info_span!("load", group);

        async {
            info!(count = entries.len(), "Fetching repository metadata");

            let results: Vec<(RepoId, Result<RepoMetadata, FetchError>)> = stream::iter(entries)
                .map(|entry| {
                    let id = entry.repo.clone();
                    async move {
                        let result = self.fetch_one(&id).await;
                        (id, result)
                    }
                })
                .buffered(self.concurrency)
                .collect()
                .await;

            let validated = collect_group(results, outcomes);
            info!(validated = validated.len(), "Group load complete");
            validated
        }
        .instrument(span)
        .await
    }

    /// Fetches and validates a single repository.
    async fn fetch_one(&self, id: &RepoId) -> Result<RepoMetadata, FetchError> {
        let route = format!("/repos/{}/{}", id.owner(), id.name());
        let raw: serde_json::Value = self.octocrab.get(route, None::<&()>).await?;
        RepoMetadata::from_value(raw)
    }
}

/// Collects per-identifier results, in input order, into the validated set.
///
/// A failed identifier is logged and skipped; it never aborts the batch.
fn collect_group(
    results: Vec<(RepoId, Result<RepoMetadata, FetchError>)>,
    outcomes: &mut Vec<FetchOutcome>,
) -> Vec<RepoMetadata> {
    let mut validated = Vec::with_capacity(results.len());

    for (id, result) in results {
        match result {
            Ok(metadata) => {
                debug!(repo = %id, stars = metadata.stargazers_count, "Validated repository");
                outcomes.push(FetchOutcome::Validated {
                    repository: id.full_name(),
                });
                validated.push(metadata);
            }
            Err(e) => {
                error!(repo = %id, error = %e, "Skipping repository");
                outcomes.push(FetchOutcome::Skipped {
                    repository: id.full_name(),
                    error: e.to_string(),
                });
            }
        }
    }

    validated
}
