//! Card projection error types.

use thiserror::Error;

/// Errors that can occur while projecting records into display cards.
#[derive(Debug, Error)]
pub enum CardError {
    /// A record reached the rendering stage without a preview-image binding.
    ///
    /// This halts the build immediately so the omission is caught before
    /// deployment.
    #[error("No preview image binding for repository '{full_name}'")]
    MissingPreviewBinding { full_name: String },
}
