#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod cards;
pub mod config;
pub mod github;
pub mod pages;
pub mod runner;
pub mod summary;

pub use cards::{language_icon, project_cards, CardError, ProjectCard};
pub use config::{ConfigError, RepoEntry, RepoId, RepoStatus, SiteConfig};
pub use github::{
    sample::{sample_bindings, sample_projects},
    FetchError, LoadedProjects, RepoFetcher, RepoMetadata,
};
pub use pages::{
    create_handlebars_registry, PageData, PageRenderer, RenderError, SectionData,
    DEFAULT_PAGE_TEMPLATE,
};
pub use runner::{Mode, Runner, RunnerConfig, RunnerError, DEFAULT_REVALIDATE_SECS};
pub use summary::{FetchOutcome, RunSummary};
