//! Template context — serializable rendering payload built from collected records.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use plugdoc_core::PluginRecord;

use crate::error::RenderError;

/// Data handed to a template.
///
/// Templates iterate `plugins` (each with `title`, `description`, `url`) and
/// may read run details from `meta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    /// Records in traversal order.
    pub plugins: Vec<PluginRecord>,
    /// Run details.
    pub meta: MetaCtx,
}

/// Run details exposed as `meta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub plugdoc_version: String,
    pub plugin_count: usize,
    pub source_dir: String,
    pub generated_at: DateTime<Utc>,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from collected records.
    pub fn new(plugins: Vec<PluginRecord>, source_dir: &Path) -> Self {
        let plugin_count = plugins.len();
        TemplateContext {
            plugins,
            meta: MetaCtx {
                plugdoc_version: env!("CARGO_PKG_VERSION").to_string(),
                plugin_count,
                source_dir: source_dir.display().to_string(),
                generated_at: Utc::now(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::Context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(owner: &str, repo: &str) -> PluginRecord {
        PluginRecord::from_url(format!("https://github.com/{owner}/{repo}")).unwrap()
    }

    #[test]
    fn context_fields_populated() {
        let ctx = TemplateContext::new(
            vec![record("a", "one"), record("b", "two")],
            Path::new("/home/me/.config/nvim/lua"),
        );
        assert_eq!(ctx.meta.plugin_count, 2);
        assert_eq!(ctx.meta.source_dir, "/home/me/.config/nvim/lua");
        assert_eq!(ctx.plugins[1].title, "b/two");
    }

    #[test]
    fn to_tera_context_succeeds() {
        let ctx = TemplateContext::new(vec![record("a", "b")], Path::new("."));
        let tera_ctx = ctx.to_tera_context().expect("context conversion");
        assert!(tera_ctx.contains_key("plugins"));
        assert!(tera_ctx.contains_key("meta"));
    }

    #[test]
    fn generated_at_serializes_as_rfc3339() {
        let ctx = TemplateContext::new(vec![], Path::new("."));
        let json = serde_json::to_value(&ctx).unwrap();
        let stamp = json["meta"]["generated_at"].as_str().expect("string timestamp");
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
