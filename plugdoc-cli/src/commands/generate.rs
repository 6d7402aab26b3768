//! `plugdoc --dir <path> [--output <path>] [--template <path>] [--dry-run]`

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use plugdoc_generate::{
    pipeline, GenerateOptions, GenerateReport, Outcome, DEFAULT_OUTPUT, DEFAULT_TEMPLATE,
};

/// Scan a plugin directory and append rendered documentation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory containing plugin files (required).
    #[arg(
        long,
        env = "PLUGDOC_DIR",
        value_name = "PATH",
        num_args = 1,
        value_parser = clap::builder::ValueParser::os_string()
    )]
    pub dir: Option<OsString>,

    /// Output file path for the generated documentation.
    #[arg(long, env = "PLUGDOC_OUTPUT", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Path to the template file for formatting.
    #[arg(long, env = "PLUGDOC_TEMPLATE", value_name = "PATH", default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// Print the rendered output instead of appending it.
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// The plugin directory; an empty value counts as missing.
    pub fn plugin_dir(&self) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    /// Run the pipeline for `dir`. A missing `dir` is handled by the caller.
    pub fn run(self, dir: PathBuf) -> Result<()> {
        let options = GenerateOptions {
            dir,
            output: self.output,
            template: self.template,
            dry_run: self.dry_run,
        };
        tracing::debug!(
            dir = %options.dir.display(),
            output = %options.output.display(),
            template = %options.template.display(),
            dry_run = options.dry_run,
            "starting generate run"
        );

        match pipeline::run(&options) {
            Ok(report) => {
                print_report(&report);
                Ok(())
            }
            Err(err) if err.is_no_records() => {
                println!("{err}");
                Ok(())
            }
            Err(err) => Err(err).with_context(|| {
                format!("failed to generate docs from '{}'", options.dir.display())
            }),
        }
    }
}

fn print_report(report: &GenerateReport) {
    let skipped = report.collection.skipped.len();
    let count = report.collection.len();

    match &report.outcome {
        Outcome::WouldAppend { content, .. } => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
        }
        Outcome::Appended { bytes, .. } => {
            println!(
                "{} {} generated successfully ({count} plugin(s), {bytes} bytes appended)",
                "✓".green(),
                report.outcome.path().display()
            );
        }
    }

    if skipped > 0 {
        println!(
            "  {} {skipped} file(s) skipped; see the warnings on stderr",
            "!".yellow()
        );
    }
}
