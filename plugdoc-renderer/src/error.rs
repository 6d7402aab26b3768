//! Error types for plugdoc-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template loading and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file could not be read.
    #[error("failed to read template {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The template source failed to parse.
    #[error("error parsing template {name}: {source}")]
    TemplateLoad {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// The template parsed but failed while rendering.
    #[error("error executing template {name}: {source}")]
    TemplateExecution {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// The context could not be serialized into a tera context.
    #[error("context serialization error: {0}")]
    Context(#[source] tera::Error),
}

impl RenderError {
    /// `true` when the failure happened before rendering started.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, RenderError::Io { .. } | RenderError::TemplateLoad { .. })
    }
}
