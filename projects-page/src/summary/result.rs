//! Per-repository fetch outcomes.

/// Outcome of loading a single configured repository.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The response passed schema validation.
    Validated {
        /// Repository full name.
        repository: String,
    },

    /// The repository was skipped (fetch or validation failure).
    Skipped {
        /// Repository full name.
        repository: String,
        /// Error message.
        error: String,
    },
}
