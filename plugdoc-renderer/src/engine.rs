//! Tera rendering engine — [`TemplateEngine`] and the embedded starter template.
//!
//! A template is loaded once, from a user file or an in-memory string, and
//! rendered against a [`TemplateContext`]. Autoescaping is off: output is
//! Markdown and URLs must come through untouched.

use std::path::Path;

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded template, baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

/// Starter template written by `plugdoc --init-template`.
pub const STARTER_TEMPLATE: &str = include_str!("templates/plugins.md.tera");

const STARTER_NAME: &str = "plugins.md.tera";

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// A single parsed template ready to render.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
    name: String,
}

impl TemplateEngine {
    /// Load and parse the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_source(&path.display().to_string(), &source)
    }

    /// Parse `source` under `name`.
    pub fn from_source(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|source| RenderError::TemplateLoad {
                name: name.to_string(),
                source,
            })?;
        Ok(TemplateEngine {
            tera,
            name: name.to_string(),
        })
    }

    /// The embedded [`STARTER_TEMPLATE`].
    pub fn starter() -> Result<Self, RenderError> {
        Self::from_source(STARTER_NAME, STARTER_TEMPLATE)
    }

    /// Name the template was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the template against `ctx`.
    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        self.tera
            .render(&self.name, &tera_ctx)
            .map_err(|source| RenderError::TemplateExecution {
                name: self.name.clone(),
                source,
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
