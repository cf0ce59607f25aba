//! Command dispatch.
//!
//! Each command reads exactly one file through the library and writes its
//! result to stdout.

mod check;
mod expand;
mod refs;

use anyhow::Result;
use yamlcfg::ConfigLoader;

use crate::args::{Cli, Commands};

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let loader = ConfigLoader::new().with_bare_vars(cli.bare_vars_policy());
    tracing::debug!(bare_vars = ?cli.bare_vars_policy(), "configured expander");

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Expand { file } => expand::run(&loader, &file, &mut stdout),
        Commands::Refs { file } => refs::run(&loader, &file, &mut stdout),
        Commands::Check { file, format } => check::run(&loader, &file, format, &mut stdout),
    }
}
