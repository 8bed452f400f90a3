//! Site configuration loading.
//!
//! The config file is the single declarative source for the repository lists
//! and their preview-image bindings. Bindings are checked against the
//! filesystem when the config is loaded, so a missing image fails the build
//! up front instead of surfacing while rendering.

mod entry;
mod error;

pub use entry::{RepoEntry, RepoId, RepoStatus};
pub use error::ConfigError;

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

fn default_page_title() -> String {
    "Projects".to_string()
}

fn default_personal_description() -> String {
    "These are some projects that I have built on my spare time as hobby projects.".to_string()
}

fn default_oss_description() -> String {
    "These are some Open Source projects I often contribute to. Some I even maintain.".to_string()
}

/// Parsed site configuration.
///
/// Two independent repository groups are configured: personal projects and
/// open-source projects. Each entry binds an identifier to a preview image
/// and an optional status tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Page title.
    #[serde(default = "default_page_title")]
    pub title: String,

    /// Blurb shown above the personal projects section.
    #[serde(default = "default_personal_description")]
    pub personal_description: String,

    /// Blurb shown above the open-source section.
    #[serde(default = "default_oss_description")]
    pub oss_description: String,

    /// Personal project repositories, in display order.
    #[serde(default)]
    pub personal: Vec<RepoEntry>,

    /// Open-source repositories, in display order.
    #[serde(default)]
    pub oss: Vec<RepoEntry>,
}

impl SiteConfig {
    /// Loads and validates the site configuration from a TOML file.
    ///
    /// Preview image paths are resolved relative to the config file's
    /// directory and must exist; duplicate identifiers are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!(path = %path.display(), "Loading site config");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: SiteConfig =
            toml::from_str(&content).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        config.validate(path, base_dir)?;

        info!(
            personal = config.personal.len(),
            oss = config.oss.len(),
            "Loaded site config"
        );
        Ok(config)
    }

    /// Validates the configuration against the filesystem.
    fn validate(&self, config_path: &Path, base_dir: &Path) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for entry in self.entries() {
            let full_name = entry.repo.full_name();

            if !seen.insert(full_name.clone()) {
                return Err(ConfigError::ValidationError {
                    path: config_path.display().to_string(),
                    message: format!("duplicate repository '{full_name}'"),
                });
            }

            let preview_path = base_dir.join(&entry.preview);
            if !preview_path.is_file() {
                return Err(ConfigError::MissingPreviewImage {
                    repo: full_name,
                    path: preview_path.display().to_string(),
                });
            }
            debug!(repo = %entry.repo, preview = %entry.preview, "Preview binding ok");
        }

        Ok(())
    }

    /// Iterates over all configured entries across both groups.
    pub fn entries(&self) -> impl Iterator<Item = &RepoEntry> {
        self.personal.iter().chain(self.oss.iter())
    }

    /// Returns the total number of configured repositories.
    #[must_use]
    pub fn repo_count(&self) -> usize {
        self.personal.len() + self.oss.len()
    }

    /// Builds the full-name to entry lookup used by card projection.
    #[must_use]
    pub fn preview_table(&self) -> HashMap<String, &RepoEntry> {
        self.entries()
            .map(|entry| (entry.repo.full_name(), entry))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("site.toml");
        fs::write(&path, content).unwrap();
        path
    }

    fn create_image(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"png").unwrap();
    }

    const VALID_CONFIG: &str = r#"
title = "Projects"

[[personal]]
repo = "juliusmarminge/stocks"
preview = "images/stocks.png"
status = "in-progress"

[[oss]]
repo = "trpc/trpc"
preview = "images/trpc.png"
"#;

    #[test]
    fn load_valid_config() {
        let temp = TempDir::new().unwrap();
        create_image(temp.path(), "images/stocks.png");
        create_image(temp.path(), "images/trpc.png");
        let path = write_config(temp.path(), VALID_CONFIG);

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.title, "Projects");
        assert_eq!(config.personal.len(), 1);
        assert_eq!(config.oss.len(), 1);
        assert_eq!(config.personal[0].status, Some(RepoStatus::InProgress));
        assert_eq!(config.repo_count(), 2);
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = SiteConfig::load(&temp.path().join("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn load_rejects_missing_preview_image() {
        let temp = TempDir::new().unwrap();
        create_image(temp.path(), "images/stocks.png");
        // trpc.png deliberately absent
        let path = write_config(temp.path(), VALID_CONFIG);

        let result = SiteConfig::load(&path);
        assert!(matches!(
            result,
            Err(ConfigError::MissingPreviewImage { ref repo, .. }) if repo == "trpc/trpc"
        ));
    }

    #[test]
    fn load_rejects_duplicate_identifier() {
        let temp = TempDir::new().unwrap();
        create_image(temp.path(), "images/trpc.png");
        let path = write_config(
            temp.path(),
            r#"
[[personal]]
repo = "trpc/trpc"
preview = "images/trpc.png"

[[oss]]
repo = "trpc/trpc"
preview = "images/trpc.png"
"#,
        );

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn load_rejects_malformed_identifier() {
        let temp = TempDir::new().unwrap();
        create_image(temp.path(), "images/trpc.png");
        let path = write_config(
            temp.path(),
            r#"
[[oss]]
repo = "not-an-identifier"
preview = "images/trpc.png"
"#,
        );

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn defaults_apply_to_empty_config() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), "");

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.title, "Projects");
        assert!(config.personal.is_empty());
        assert!(config.oss.is_empty());
        assert!(!config.personal_description.is_empty());
        assert!(!config.oss_description.is_empty());
    }

    #[test]
    fn preview_table_covers_both_groups() {
        let temp = TempDir::new().unwrap();
        create_image(temp.path(), "images/stocks.png");
        create_image(temp.path(), "images/trpc.png");
        let path = write_config(temp.path(), VALID_CONFIG);

        let config = SiteConfig::load(&path).unwrap();
        let table = config.preview_table();

        assert_eq!(table.len(), 2);
        assert!(table.contains_key("juliusmarminge/stocks"));
        assert!(table.contains_key("trpc/trpc"));
    }
}
