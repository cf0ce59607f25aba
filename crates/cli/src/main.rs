//! yamlcfg CLI - inspect YAML configuration files the way `yamlcfg` loads them.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run the expand, refs and check commands against the shared library.
//! - Map load failures to structured exit codes.
//!
//! Does NOT handle:
//! - Expansion or decoding logic (see `crates/yamlcfg`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match commands::run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
