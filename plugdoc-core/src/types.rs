//! Domain types for extracted plugin metadata.
//!
//! A [`PluginRecord`] is built once per scanned file and never mutated
//! afterwards. Its serialized field names (`title`, `description`, `url`) are
//! the names templates see.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TitleError;

// ---------------------------------------------------------------------------
// PluginRecord
// ---------------------------------------------------------------------------

/// Metadata extracted from one plugin file's header comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    /// `owner/repo` style identifier taken from the last two URL segments.
    pub title: String,
    /// Free-form description; empty when the header declares none.
    #[serde(default)]
    pub description: String,
    /// Canonical source reference.
    pub url: String,
}

impl PluginRecord {
    /// Build a record from a trimmed URL, deriving its title.
    pub fn from_url(url: impl Into<String>) -> Result<Self, TitleError> {
        let url = url.into();
        let title = derive_title(&url)?;
        Ok(Self {
            title,
            description: String::new(),
            url,
        })
    }

    /// Replace the description, consuming `self`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// `true` when the header declared a non-empty description.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

impl fmt::Display for PluginRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.title, self.url)
    }
}

// ---------------------------------------------------------------------------
// Title derivation
// ---------------------------------------------------------------------------

/// Join the last two `/`-separated segments of `url`.
///
/// Both segments must be non-empty: `https://example.com` splits into
/// `["https:", "", "example.com"]` and is rejected, as is a URL with a
/// trailing slash.
pub fn derive_title(url: &str) -> Result<String, TitleError> {
    let segments: Vec<&str> = url.split('/').collect();
    let [.., owner, repo] = segments.as_slice() else {
        return Err(TitleError::TooFewSegments {
            url: url.to_string(),
        });
    };
    if owner.is_empty() || repo.is_empty() {
        return Err(TitleError::EmptySegment {
            url: url.to_string(),
        });
    }
    Ok(format!("{owner}/{repo}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
