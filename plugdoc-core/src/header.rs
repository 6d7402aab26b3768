//! Header extraction for plugin source files.
//!
//! A header line is a single `--` comment carrying an optional `url:` field
//! followed by an optional `desc:` field:
//!
//! ```text
//! -- url: https://github.com/owner/repo
//! -- desc: does a thing
//! -- url: https://github.com/owner/repo desc: does a thing
//! ```
//!
//! Every line of the file is tested. Each field is last-match-wins, so the
//! record reflects the final `url:` and the final `desc:` seen, whichever
//! lines they came from. A file with no `url:` yields no record.

use std::path::Path;

use regex::Regex;

use crate::error::ExtractError;
use crate::types::PluginRecord;

/// Header pattern. `[\t\n\f\r ]` is ASCII whitespace without `\v`; the
/// `url:`/`desc:` order on a single line is fixed.
pub const HEADER_PATTERN: &str =
    r"^[\t\n\f\r ]*--(?:[\t\n\f\r ]*url: (.*?))?(?:[\t\n\f\r ]*desc: (.*?))?[\t\n\f\r ]*$";

/// Compiled header matcher. Build once and reuse across files.
#[derive(Debug, Clone)]
pub struct HeaderExtractor {
    pattern: Regex,
}

impl HeaderExtractor {
    /// Compile [`HEADER_PATTERN`].
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            pattern: Regex::new(HEADER_PATTERN)?,
        })
    }

    /// Read `path` and extract its header.
    ///
    /// Content is decoded lossily, so binary files are scanned rather than
    /// rejected.
    pub fn extract_file(&self, path: &Path) -> Result<Option<PluginRecord>, ExtractError> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        self.extract(path, &content)
    }

    /// Extract a header from already-loaded `content`.
    ///
    /// `path` is only used to annotate errors. Returns `Ok(None)` when no
    /// line declared a URL.
    pub fn extract(
        &self,
        path: &Path,
        content: &str,
    ) -> Result<Option<PluginRecord>, ExtractError> {
        let mut record: Option<PluginRecord> = None;
        let mut description: Option<String> = None;

        for line in content.split('\n') {
            let Some(caps) = self.pattern.captures(line) else {
                continue;
            };

            if let Some(url) = caps.get(1).map(|m| m.as_str()).filter(|s| !s.is_empty()) {
                let parsed = PluginRecord::from_url(url.trim()).map_err(|source| {
                    ExtractError::MalformedUrl {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                record = Some(parsed);
            }

            if let Some(desc) = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty()) {
                description = Some(desc.trim().to_string());
            }
        }

        Ok(record.map(|r| match description {
            Some(desc) => r.with_description(desc),
            None => r,
        }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
