//! `yamlcfg expand`: print a file with references substituted.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use yamlcfg::ConfigLoader;

pub fn run(loader: &ConfigLoader, file: &Path, out: &mut impl Write) -> Result<()> {
    let text = loader.expand_file(file)?;
    out.write_all(text.as_bytes())
        .context("Failed to write expanded config")?;
    Ok(())
}
