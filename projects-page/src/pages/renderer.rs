//! Page renderer.

use super::{PageData, RenderError};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext};

/// The built-in page template.
pub const DEFAULT_PAGE_TEMPLATE: &str = include_str!("../../templates/projects.hbs");

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
///
/// HTML escaping stays enabled: card fields come from an external API and the
/// output is HTML.
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Enable strict mode to catch missing variables
    hbs.set_strict_mode(true);

    // Register the eq helper for conditionals
    hbs.register_helper("eq", Box::new(eq_helper));

    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq variable "value")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders page data into static HTML.
pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    /// Creates a new page renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the projects page from a template and page data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is invalid or references variables the
    /// data doesn't provide.
    pub fn render_page(&self, template: &str, data: &PageData) -> Result<String, RenderError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ProjectCard;
    use crate::pages::SectionData;

    fn sample_card() -> ProjectCard {
        ProjectCard {
            title: "stocks".to_string(),
            full_name: "juliusmarminge/stocks".to_string(),
            description: "A stock market simulator".to_string(),
            stars: 42069,
            language: "TypeScript".to_string(),
            language_icon: Some("si-typescript"),
            link: "https://stocks.jumr.dev".to_string(),
            repo_url: "https://github.com/juliusmarminge/stocks".to_string(),
            preview: "images/stocks.png".to_string(),
            status: Some("In Progress"),
        }
    }

    fn sample_data() -> PageData {
        PageData {
            title: "Projects".to_string(),
            sections: vec![SectionData {
                title: "Personal".to_string(),
                description: "Hobby projects.".to_string(),
                cards: vec![sample_card()],
            }],
        }
    }

    #[test]
    fn renders_default_template() {
        let renderer = PageRenderer::new();
        let html = renderer
            .render_page(DEFAULT_PAGE_TEMPLATE, &sample_data())
            .unwrap();

        assert!(html.contains("<title>Projects</title>"));
        assert!(html.contains("stocks"));
        assert!(html.contains("42069"));
        assert!(html.contains("In Progress"));
        assert!(html.contains("status-tag in-progress"));
        assert!(html.contains("si-typescript"));
        assert!(html.contains("https://stocks.jumr.dev"));
        assert!(html.contains("images/stocks.png"));
    }

    #[test]
    fn renders_card_without_status_or_icon() {
        let mut data = sample_data();
        data.sections[0].cards[0].status = None;
        data.sections[0].cards[0].language_icon = None;

        let renderer = PageRenderer::new();
        let html = renderer.render_page(DEFAULT_PAGE_TEMPLATE, &data).unwrap();

        assert!(!html.contains("In Progress"));
        assert!(!html.contains("si-typescript"));
    }

    #[test]
    fn html_in_fields_is_escaped() {
        let mut data = sample_data();
        data.sections[0].cards[0].description = "<script>alert('xss')</script>".to_string();

        let renderer = PageRenderer::new();
        let html = renderer.render_page(DEFAULT_PAGE_TEMPLATE, &data).unwrap();

        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn strict_mode_rejects_unknown_variable() {
        let renderer = PageRenderer::new();
        let result = renderer.render_page("{{no_such_field}}", &sample_data());
        assert!(result.is_err());
    }

    #[test]
    fn eq_helper_compares_strings() {
        let renderer = PageRenderer::new();
        let template =
            r#"{{#each sections}}{{#if (eq title "Personal")}}match{{/if}}{{/each}}"#;

        let html = renderer.render_page(template, &sample_data()).unwrap();
        assert_eq!(html, "match");
    }
}
