//! # plugdoc-renderer
//!
//! Tera-based template engine that renders collected plugin records into
//! documentation text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use plugdoc_core::PluginRecord;
//! use plugdoc_renderer::{TemplateContext, TemplateEngine};
//!
//! fn render(records: Vec<PluginRecord>) {
//!     if let Ok(engine) = TemplateEngine::from_file(Path::new("template.tmpl")) {
//!         let ctx = TemplateContext::new(records, Path::new("lua/plugins"));
//!         if let Ok(text) = engine.render(&ctx) {
//!             println!("{text}");
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{MetaCtx, TemplateContext};
pub use engine::{TemplateEngine, STARTER_TEMPLATE};
pub use error::RenderError;
