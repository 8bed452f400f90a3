//! Page rendering error types.

/// Page rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    Render(#[from] handlebars::RenderError),
}
