//! Static page rendering using Handlebars.

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{create_handlebars_registry, PageRenderer, DEFAULT_PAGE_TEMPLATE};

use crate::cards::ProjectCard;
use serde::Serialize;

/// Everything the page template needs.
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    /// Page title.
    pub title: String,

    /// Sections in display order.
    pub sections: Vec<SectionData>,
}

/// One section of the page (a repository group).
#[derive(Debug, Clone, Serialize)]
pub struct SectionData {
    /// Section heading.
    pub title: String,

    /// Section blurb.
    pub description: String,

    /// Cards in display order.
    pub cards: Vec<ProjectCard>,
}
