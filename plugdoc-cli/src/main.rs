//! plugdoc — generate plugin documentation from header comments.
//!
//! # Usage
//!
//! ```text
//! plugdoc --dir <path> [--output README.md] [--template template.tmpl] [--dry-run] [-v|-q]
//! plugdoc --init-template [--template template.tmpl]
//! ```

mod commands;
mod logging;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use commands::generate::GenerateArgs;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "plugdoc",
    version,
    about = "Generate a plugin list from `-- url:` / `-- desc:` header comments",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,

    /// Write the built-in starter template to --template and exit.
    #[arg(long)]
    init_template: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    if cli.init_template {
        return commands::init_template::run(&cli.generate.template);
    }

    let Some(dir) = cli.generate.plugin_dir() else {
        println!("Error: Missing required flag --dir");
        Cli::command().print_help()?;
        return Ok(());
    };

    cli.generate.run(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["plugdoc", "--dir", "lua"]).unwrap();
        assert_eq!(cli.generate.output.to_str(), Some("README.md"));
        assert_eq!(cli.generate.template.to_str(), Some("template.tmpl"));
        assert!(!cli.generate.dry_run);
        assert!(!cli.init_template);
    }

    #[test]
    fn dir_is_optional_at_parse_time() {
        assert!(Cli::try_parse_from(["plugdoc"]).is_ok());
    }

    #[test]
    fn empty_dir_counts_as_missing() {
        let cli = Cli::try_parse_from(["plugdoc", "--dir", ""]).unwrap();
        assert!(cli.generate.plugin_dir().is_none());

        let cli = Cli::try_parse_from(["plugdoc", "--dir", "lua"]).unwrap();
        assert_eq!(cli.generate.plugin_dir(), Some(std::path::PathBuf::from("lua")));
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["plugdoc", "-v", "-q"]).is_err());
    }
}
