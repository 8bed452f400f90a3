//! Run summary types.

use super::result::FetchOutcome;

/// Summary of a complete page build.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories in the site configuration.
    pub repos_configured: usize,

    /// Number of repositories that passed validation.
    pub repos_validated: usize,

    /// Number of repositories skipped (fetch or validation failure).
    pub repos_skipped: usize,

    /// Number of cards rendered into the page.
    pub cards_rendered: usize,

    /// Whether this was a development-mode build (sample data, no network).
    pub development: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(development: bool) -> Self {
        Self {
            development,
            ..Default::default()
        }
    }

    /// Updates the summary with a fetch outcome.
    pub fn record_outcome(&mut self, outcome: &FetchOutcome) {
        match outcome {
            FetchOutcome::Validated { .. } => self.repos_validated += 1,
            FetchOutcome::Skipped { .. } => self.repos_skipped += 1,
        }
    }

    /// Returns true if any repository was skipped.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.repos_skipped > 0
    }

    /// Returns true if every configured repository made it onto the page.
    #[must_use]
    pub fn all_success(&self) -> bool {
        self.repos_skipped == 0
    }
}
