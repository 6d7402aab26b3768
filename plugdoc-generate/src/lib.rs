//! # plugdoc-generate
//!
//! Append-only writer and run orchestration.
//!
//! Call [`run`] with [`GenerateOptions`] to walk a plugin directory, render
//! the collected records through a template, and append the result to the
//! output file.

pub mod error;
pub mod pipeline;
pub mod writer;

pub use error::GenerateError;
pub use pipeline::{run, GenerateOptions, GenerateReport, DEFAULT_OUTPUT, DEFAULT_TEMPLATE};
pub use writer::{append, Outcome};
