//! `yamlcfg refs`: list the variable references in a file.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use yamlcfg::{ConfigLoader, DecodeError, LoadError, read_file};

pub fn run(loader: &ConfigLoader, file: &Path, out: &mut impl Write) -> Result<()> {
    let bytes = read_file(file)?;
    let text = std::str::from_utf8(&bytes).map_err(|e| LoadError::from(DecodeError::from(e)))?;

    let expander = loader.expander();
    for reference in expander.references(text) {
        let status = if expander.lookup(&reference.name).is_some() {
            "set"
        } else {
            "unset"
        };
        let line = match &reference.default {
            Some(default) => format!("{}\t{}\tdefault={}", reference.name, status, default),
            None => format!("{}\t{}", reference.name, status),
        };
        writeln!(out, "{}", line).context("Failed to write reference list")?;
    }
    Ok(())
}
