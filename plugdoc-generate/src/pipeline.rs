//! Collect → render → append pipeline used by the CLI.

use std::path::PathBuf;

use plugdoc_collector::{collect, Collection};
use plugdoc_renderer::{TemplateContext, TemplateEngine};

use crate::error::GenerateError;
use crate::writer::{open_append, write_appended, Outcome};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "README.md";
/// Default template file, relative to the working directory.
pub const DEFAULT_TEMPLATE: &str = "template.tmpl";

/// Inputs for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Root directory to scan.
    pub dir: PathBuf,
    /// File the rendered output is appended to.
    pub output: PathBuf,
    /// Template file.
    pub template: PathBuf,
    /// Render but leave the output file untouched.
    pub dry_run: bool,
}

impl GenerateOptions {
    /// Options for `dir` with the default output and template paths.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            dry_run: false,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateReport {
    pub outcome: Outcome,
    pub collection: Collection,
}

/// Run the pipeline.
///
/// Steps, each aborting the run on failure: walk `dir`; stop with
/// [`GenerateError::NoRecords`] if nothing was found; load the template; open
/// the output for appending; render; append. The output is opened before
/// rendering, so a template that fails during execution still leaves a
/// created (but unmodified) output file behind.
pub fn run(options: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    let collection = collect(&options.dir)?;
    tracing::info!(
        dir = %options.dir.display(),
        records = collection.len(),
        skipped = collection.skipped.len(),
        scanned = collection.scanned,
        "collection finished"
    );
    if collection.is_empty() {
        return Err(GenerateError::NoRecords {
            dir: options.dir.clone(),
        });
    }

    let engine = TemplateEngine::from_file(&options.template)?;
    tracing::debug!(template = engine.name(), "template loaded");
    let ctx = TemplateContext::new(collection.records.clone(), &options.dir);

    let outcome = if options.dry_run {
        let content = engine.render(&ctx)?;
        tracing::info!("[dry-run] would append to: {}", options.output.display());
        Outcome::WouldAppend {
            path: options.output.clone(),
            content,
        }
    } else {
        let mut file = open_append(&options.output)?;
        let content = engine.render(&ctx)?;
        write_appended(&mut file, &options.output, &content)?
    };

    Ok(GenerateReport {
        outcome,
        collection,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn options(ws: &TempDir) -> GenerateOptions {
        let plugins = ws.path().join("plugins");
        fs::create_dir_all(&plugins).expect("mkdir");
        GenerateOptions {
            dir: plugins,
            output: ws.path().join("README.md"),
            template: ws.path().join("template.tmpl"),
            dry_run: false,
        }
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let opts = GenerateOptions::new("lua");
        assert_eq!(opts.output, PathBuf::from("README.md"));
        assert_eq!(opts.template, PathBuf::from("template.tmpl"));
        assert!(!opts.dry_run);
    }

    #[test]
    fn empty_dir_is_no_records_and_touches_nothing() {
        let ws = TempDir::new().expect("ws");
        let opts = options(&ws);
        let err = run(&opts).unwrap_err();
        assert!(err.is_no_records());
        assert!(!opts.output.exists());
    }

    #[test]
    fn dry_run_leaves_output_absent() {
        let ws = TempDir::new().expect("ws");
        let mut opts = options(&ws);
        opts.dry_run = true;
        fs::write(opts.dir.join("p.lua"), "-- url: https://github.com/a/b\n").unwrap();
        fs::write(&opts.template, "{% for p in plugins %}{{ p.title }}{% endfor %}").unwrap();

        let report = run(&opts).expect("run");
        match report.outcome {
            Outcome::WouldAppend { content, .. } => assert_eq!(content, "a/b"),
            other => panic!("expected WouldAppend, got {other:?}"),
        }
        assert!(!opts.output.exists());
    }
}
