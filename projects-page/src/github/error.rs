//! Repository fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching and validating repository metadata.
///
/// Both variants are handled identically by the loader: the repository is
/// skipped, the error is logged, and the remaining identifiers are still
/// processed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error (network failure, timeout, or non-2xx response).
    #[error("GitHub API error: {0}")]
    GitHub(#[from] octocrab::Error),

    /// The response body did not match the expected repository schema.
    #[error("Schema validation failed: {message}; response was {raw}")]
    Schema { raw: String, message: String },
}
