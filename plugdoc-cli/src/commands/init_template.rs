//! `plugdoc --init-template [--template <path>]`

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use plugdoc_renderer::STARTER_TEMPLATE;

/// Write the embedded starter template to `path`. Never overwrites.
pub fn run(path: &Path) -> Result<()> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::AlreadyExists => {
            bail!("template '{}' already exists; refusing to overwrite", path.display())
        }
        Err(err) => {
            return Err(err).with_context(|| format!("cannot create '{}'", path.display()))
        }
    };
    file.write_all(STARTER_TEMPLATE.as_bytes())
        .with_context(|| format!("cannot write '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "starter template written");
    println!("{} wrote starter template to {}", "✓".green(), path.display());
    Ok(())
}
