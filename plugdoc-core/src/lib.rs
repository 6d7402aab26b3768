//! plugdoc core library — plugin record type, header extraction, errors.
//!
//! - [`types`] — [`PluginRecord`] and title derivation
//! - [`header`] — [`HeaderExtractor`], the per-file `-- url: / -- desc:` parser
//! - [`error`] — [`ExtractError`], [`TitleError`]

pub mod error;
pub mod header;
pub mod types;

pub use error::{ExtractError, TitleError};
pub use header::{HeaderExtractor, HEADER_PATTERN};
pub use types::{derive_title, PluginRecord};
