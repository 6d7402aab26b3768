//! Plugin file collection for `plugdoc-collector`.
//!
//! [`Collector::collect`] walks a directory tree depth-first in lexical order,
//! runs the header extractor over every non-directory entry, and keeps the
//! records that declare a URL. Per-file failures are logged and recorded in
//! [`Collection::skipped`]; only a failure of the walk itself is fatal.

use std::path::{Path, PathBuf};

use plugdoc_core::{ExtractError, HeaderExtractor, PluginRecord};
use thiserror::Error;
use walkdir::WalkDir;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A file that was visited but could not contribute a record.
#[derive(Debug)]
pub struct SkippedFile {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Read failure or malformed header.
    pub reason: ExtractError,
}

/// Result of one collection pass.
#[derive(Debug, Default)]
pub struct Collection {
    /// Records in traversal order.
    pub records: Vec<PluginRecord>,
    /// Files that failed to read or extract, in traversal order.
    pub skipped: Vec<SkippedFile>,
    /// Number of non-directory entries visited.
    pub scanned: usize,
}

impl Collection {
    /// `true` when no file produced a record.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of collected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Fatal errors from a collection pass.
#[derive(Debug, Error)]
pub enum CollectError {
    /// The directory walk could not proceed (missing root, unreadable directory).
    #[error("error walking directory {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The header extractor could not be built.
    #[error("extractor setup failed: {0}")]
    Extractor(#[from] ExtractError),
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Walks a plugin directory and accumulates [`PluginRecord`]s.
#[derive(Debug, Clone)]
pub struct Collector {
    extractor: HeaderExtractor,
}

impl Collector {
    /// Wrap an already-compiled extractor.
    pub fn new(extractor: HeaderExtractor) -> Self {
        Self { extractor }
    }

    /// Walk `root` and collect every valid record.
    ///
    /// `root` itself may be a single file. Symlinks are not followed but are
    /// still read, so a link to a file contributes its target's header.
    pub fn collect(&self, root: &Path) -> Result<Collection, CollectError> {
        let mut collection = Collection::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|source| CollectError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path();
            collection.scanned += 1;
            tracing::debug!(path = %path.display(), "parsing file");

            match self.extractor.extract_file(path) {
                Ok(Some(record)) => {
                    tracing::debug!(path = %path.display(), title = %record.title, "found plugin");
                    collection.records.push(record);
                }
                Ok(None) => {}
                Err(reason) => {
                    tracing::warn!(path = %path.display(), error = %reason, "skipping file");
                    collection.skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason,
                    });
                }
            }
        }

        Ok(collection)
    }
}

/// Collect from `root` with a freshly compiled extractor.
pub fn collect(root: &Path) -> Result<Collection, CollectError> {
    let extractor = HeaderExtractor::new()?;
    Collector::new(extractor).collect(root)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
