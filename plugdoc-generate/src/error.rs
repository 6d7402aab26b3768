//! Error types for plugdoc-generate.

use std::path::PathBuf;

use thiserror::Error;

use plugdoc_collector::CollectError;
use plugdoc_renderer::RenderError;

/// All errors that can end a generate run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The directory walk failed.
    #[error(transparent)]
    Collect(#[from] CollectError),

    /// The walk finished without a single valid record.
    #[error("No valid plugin files found in {dir}")]
    NoRecords { dir: PathBuf },

    /// Template load or execution failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The output file could not be opened for appending.
    #[error("error opening file {path}: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending the rendered bytes failed.
    #[error("error writing to file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// `true` for [`GenerateError::NoRecords`], which callers treat as a
    /// normal early exit rather than a failure.
    pub fn is_no_records(&self) -> bool {
        matches!(self, GenerateError::NoRecords { .. })
    }
}
