//! Template rendering with Tera

use anyhow::Result;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template("index.html", include_str!("../templates/index.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("instance_name", "Test Search");
        ctx.insert("categories", &["video", "article", "academic", "blog"]);

        let html = templates.render_with_context("index.html", &ctx).unwrap();
        assert!(html.contains("Test Search"));
        assert!(html.contains("/api/search"));
        assert!(html.contains("data-tab=\"academic\""));
    }

    #[test]
    fn test_index_shows_relevance_and_only_links_http() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("instance_name", "Test Search");
        ctx.insert("categories", &["video"]);

        let html = templates.render_with_context("index.html", &ctx).unwrap();
        assert!(html.contains("Relevance: "));
        assert!(html.contains("toFixed(2)"));
        assert!(html.contains("/^https?:\\/\\//i"));
        assert!(!html.contains("title.href = r.link"));
    }

    #[test]
    fn test_unknown_template() {
        let templates = Templates::new().unwrap();
        assert!(templates.render_with_context("missing.html", &Context::new()).is_err());
    }
}
