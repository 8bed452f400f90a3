//! Validated repository metadata.

use super::FetchError;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

/// The subset of the GitHub repository response that the page renders.
///
/// This is the shape returned by `GET /repos/{owner}/{repo}`; extra fields in
/// the response are ignored. A response missing any required field, or with a
/// wrong-typed field, is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoMetadata {
    /// Repository name.
    pub name: String,

    /// Full repository name in "owner/name" format.
    pub full_name: String,

    /// Repository description.
    pub description: String,

    /// GitHub URL of the repository.
    pub html_url: Url,

    /// Deployed homepage, if any. May be empty or absent.
    #[serde(default)]
    pub homepage: Option<String>,

    /// Primary programming language.
    pub language: String,

    /// Star count.
    pub stargazers_count: u64,
}

impl RepoMetadata {
    /// Validates a raw API response against the repository schema.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Schema`] carrying the raw response body and the
    /// validation error if any required field is missing, mistyped, or empty
    /// where emptiness is not allowed.
    pub fn from_value(value: Value) -> Result<Self, FetchError> {
        let raw = value.to_string();

        let metadata: Self = serde_json::from_value(value).map_err(|e| FetchError::Schema {
            raw: raw.clone(),
            message: e.to_string(),
        })?;

        if metadata.name.is_empty() {
            return Err(FetchError::Schema {
                raw,
                message: "field 'name' is empty".to_string(),
            });
        }

        Ok(metadata)
    }

    /// Returns the link target for the card: the homepage when it is a valid
    /// URL, otherwise the repository's GitHub URL.
    #[must_use]
    pub fn link_target(&self) -> &str {
        match &self.homepage {
            Some(homepage) if !homepage.is_empty() && Url::parse(homepage).is_ok() => homepage,
            _ => self.html_url.as_str(),
        }
    }
}
