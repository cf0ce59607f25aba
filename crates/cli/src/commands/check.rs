//! `yamlcfg check`: expand and parse a file, then print the document.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use yamlcfg::ConfigLoader;

use crate::args::OutputFormat;

pub fn run(
    loader: &ConfigLoader,
    file: &Path,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let document: serde_yaml::Value = loader.load(file)?;

    let written = match format {
        OutputFormat::Yaml => {
            let rendered =
                serde_yaml::to_string(&document).context("Failed to render document as YAML")?;
            out.write_all(rendered.as_bytes())
        }
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&document)
                .context("Failed to render document as JSON")?;
            writeln!(out, "{}", rendered)
        }
    };
    written.context("Failed to write document")?;
    Ok(())
}
