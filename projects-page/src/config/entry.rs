//! Repository list entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A repository identifier in "owner/name" form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Creates an identifier from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Returns the repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full "owner/name" form.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(format!(
                "invalid repository identifier '{s}', expected 'owner/name'"
            )),
        }
    }
}

impl TryFrom<String> for RepoId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RepoId> for String {
    fn from(id: RepoId) -> Self {
        id.full_name()
    }
}

/// Status tag attached to a configured repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepoStatus {
    /// Actively being worked on.
    InProgress,
}

impl RepoStatus {
    /// Human-readable label shown on the card.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
        }
    }
}

/// A single configured repository: identifier, preview binding, optional tag.
///
/// The preview binding is required; a repository without one cannot be
/// rendered, so the omission is caught when the config is parsed rather than
/// at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RepoEntry {
    /// Repository identifier in "owner/name" form.
    pub repo: RepoId,

    /// Path to the locally bundled preview image, relative to the config file.
    pub preview: String,

    /// Optional status tag.
    #[serde(default)]
    pub status: Option<RepoStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_identifier() {
        let id: RepoId = "trpc/trpc".parse().unwrap();
        assert_eq!(id.owner(), "trpc");
        assert_eq!(id.name(), "trpc");
        assert_eq!(id.full_name(), "trpc/trpc");
    }

    #[test]
    fn parse_rejects_missing_slash() {
        assert!("trpc".parse::<RepoId>().is_err());
    }

    #[test]
    fn parse_rejects_empty_parts() {
        assert!("/trpc".parse::<RepoId>().is_err());
        assert!("trpc/".parse::<RepoId>().is_err());
    }

    #[test]
    fn parse_rejects_extra_slash() {
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn status_labels() {
        assert_eq!(RepoStatus::InProgress.label(), "In Progress");
    }

    #[test]
    fn entry_deserializes_from_toml() {
        let entry: RepoEntry = toml::from_str(
            r#"
repo = "juliusmarminge/stocks"
preview = "images/stocks.png"
status = "in-progress"
"#,
        )
        .unwrap();

        assert_eq!(entry.repo.full_name(), "juliusmarminge/stocks");
        assert_eq!(entry.preview, "images/stocks.png");
        assert_eq!(entry.status, Some(RepoStatus::InProgress));
    }

    #[test]
    fn entry_status_defaults_to_none() {
        let entry: RepoEntry = toml::from_str(
            r#"
repo = "trpc/trpc"
preview = "images/trpc.png"
"#,
        )
        .unwrap();

        assert_eq!(entry.status, None);
    }
}
