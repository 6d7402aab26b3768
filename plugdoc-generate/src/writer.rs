//! Append-only output writer.
//!
//! The output file is opened with create + append and is never truncated, so
//! repeated runs accumulate rendered blocks. Parent directories are not
//! created; a missing parent is an open failure.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// What happened to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered bytes were appended to `path`.
    Appended { path: PathBuf, bytes: usize },
    /// `--dry-run` mode: `content` *would* have been appended to `path`.
    WouldAppend { path: PathBuf, content: String },
}

impl Outcome {
    /// The output path the outcome refers to.
    pub fn path(&self) -> &Path {
        match self {
            Outcome::Appended { path, .. } | Outcome::WouldAppend { path, .. } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// open / write
// ---------------------------------------------------------------------------

/// Open `path` for appending, creating it (mode 0644 on unix) if absent.
pub fn open_append(path: &Path) -> Result<File, GenerateError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    options.open(path).map_err(|source| GenerateError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Append `content` to an already-open `file`.
pub fn write_appended(
    file: &mut File,
    path: &Path,
    content: &str,
) -> Result<Outcome, GenerateError> {
    file.write_all(content.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "appended");
    Ok(Outcome::Appended {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}

/// Open `path` and append `content` in one step.
pub fn append(path: &Path, content: &str) -> Result<Outcome, GenerateError> {
    let mut file = open_append(path)?;
    write_appended(&mut file, path, content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
