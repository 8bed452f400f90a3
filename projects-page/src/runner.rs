//! Orchestrates full page builds.

use crate::cards::{project_cards, CardError};
use crate::config::{ConfigError, RepoEntry, SiteConfig};
use crate::github::{sample, LoadedProjects, RepoFetcher};
use crate::pages::{PageData, PageRenderer, RenderError, SectionData, DEFAULT_PAGE_TEMPLATE};
use crate::summary::RunSummary;
use octocrab::Octocrab;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// Default revalidation cadence: one full reload per day.
pub const DEFAULT_REVALIDATE_SECS: u64 = 86400;

/// Per-request timeout. Expiry is treated like any other failed fetch: the
/// repository is skipped and the rest of the page still builds.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Selects between live data and the rate-limit-friendly sample set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No network calls; deterministic sample records.
    Development,
    /// Live fetches against the GitHub API.
    Production,
}

/// Configuration for building the projects page.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the site config file.
    config_path: PathBuf,
    /// Path the rendered HTML is written to.
    output_path: PathBuf,
    /// Optional GitHub token; the repos endpoint works unauthenticated but
    /// a token raises the rate limit.
    token: Option<String>,
    /// Development or production data loading.
    mode: Mode,
    /// Maximum concurrent API requests.
    concurrency: usize,
}

impl RunnerConfig {
    /// Creates a new configuration for a build.
    pub fn new(
        config_path: PathBuf,
        output_path: PathBuf,
        token: Option<String>,
        mode: Mode,
        concurrency: usize,
    ) -> Self {
        Self {
            config_path,
            output_path,
            token,
            mode,
            concurrency,
        }
    }

    /// Returns the site config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Returns the output file path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the configured GitHub token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the data-loading mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the max concurrent API requests.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }
}

/// Errors that can occur while building the page.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Site configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),
    /// Card projection errors (missing preview binding).
    #[error(transparent)]
    Card(#[from] CardError),
    /// Page rendering errors.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// Failed to write the output file.
    #[error("Failed to write output '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Builds the projects page from configuration to rendered HTML.
pub struct Runner {
    config: RunnerConfig,
    fetcher: RepoFetcher,
    renderer: PageRenderer,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let mut builder = Octocrab::builder()
            .set_connect_timeout(Some(REQUEST_TIMEOUT))
            .set_read_timeout(Some(REQUEST_TIMEOUT));
        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        }
        let octocrab = builder.build()?;
        let fetcher = RepoFetcher::new(octocrab, config.concurrency);

        Ok(Self {
            config,
            fetcher,
            renderer: PageRenderer::new(),
        })
    }

    /// Executes one full build: load config, load repositories, project
    /// cards, render, write the output file.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let site = SiteConfig::load(self.config.config_path())?;

        let mut summary = RunSummary::new(self.config.mode == Mode::Development);
        summary.repos_configured = site.repo_count();

        // Sample records carry their own bindings, so development builds
        // don't depend on the config covering the sample identifiers.
        let loaded;
        let sample_entries;
        let table: HashMap<String, &RepoEntry> = match self.config.mode {
            Mode::Development => {
                info!("Development mode, using sample records");
                loaded = sample::sample_projects();
                sample_entries = sample::sample_bindings();
                sample_entries
                    .iter()
                    .map(|entry| (entry.repo.full_name(), entry))
                    .collect()
            }
            Mode::Production => {
                loaded = self.fetcher.load_projects(&site).await;
                site.preview_table()
            }
        };

        for outcome in &loaded.outcomes {
            summary.record_outcome(outcome);
        }

        let data = build_page_data(&site, &loaded, &table)?;
        summary.cards_rendered = data.sections.iter().map(|s| s.cards.len()).sum();

        let html = self.renderer.render_page(DEFAULT_PAGE_TEMPLATE, &data)?;
        self.write_output(&html)?;

        info!(
            output = %self.config.output_path().display(),
            cards = summary.cards_rendered,
            skipped = summary.repos_skipped,
            "Projects page built"
        );
        Ok(summary)
    }

    /// Re-runs the full build on a fixed cadence.
    ///
    /// A failed cycle is logged and the previous output is left in place; the
    /// loop itself never stops.
    pub async fn run_with_revalidation(&self, interval: Duration) -> Result<(), RunnerError> {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match self.run().await {
                Ok(summary) => info!(
                    validated = summary.repos_validated,
                    skipped = summary.repos_skipped,
                    "Rebuilt projects page"
                ),
                Err(e) => error!(error = %e, "Page build failed, keeping previous output"),
            }
        }
    }

    fn write_output(&self, html: &str) -> Result<(), RunnerError> {
        let path = self.config.output_path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| RunnerError::Io {
                    path: parent.display().to_string(),
                    source: e,
                })?;
            }
        }
        std::fs::write(path, html).map_err(|e| RunnerError::Io {
            path: path.display().to_string(),
            source: e,
        })
    }
}

/// Projects loaded records into per-section page data.
fn build_page_data(
    site: &SiteConfig,
    loaded: &LoadedProjects,
    table: &HashMap<String, &RepoEntry>,
) -> Result<PageData, CardError> {
    Ok(PageData {
        title: site.title.clone(),
        sections: vec![
            SectionData {
                title: "Personal".to_string(),
                description: site.personal_description.clone(),
                cards: project_cards(&loaded.personal, table)?,
            },
            SectionData {
                title: "Open Source".to_string(),
                description: site.oss_description.clone(),
                cards: project_cards(&loaded.oss, table)?,
            },
        ],
    })
}
