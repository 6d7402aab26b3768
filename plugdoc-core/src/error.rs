//! Error types for plugdoc-core.

use std::path::PathBuf;

use thiserror::Error;

/// Why a URL could not produce a title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// Fewer than two `/`-separated segments.
    #[error("url '{url}' has fewer than two path segments")]
    TooFewSegments { url: String },

    /// One of the last two segments is empty.
    #[error("url '{url}' ends in an empty path segment")]
    EmptySegment { url: String },
}

/// All errors that can arise while extracting a header from one file.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A header line declared a URL that cannot yield a title.
    #[error("invalid url format in {path}: {source}")]
    MalformedUrl {
        path: PathBuf,
        #[source]
        source: TitleError,
    },

    /// The built-in header pattern failed to compile.
    #[error("header pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl ExtractError {
    /// `true` for [`ExtractError::Read`].
    pub fn is_read(&self) -> bool {
        matches!(self, ExtractError::Read { .. })
    }

    /// `true` for [`ExtractError::MalformedUrl`].
    pub fn is_malformed_url(&self) -> bool {
        matches!(self, ExtractError::MalformedUrl { .. })
    }
}
