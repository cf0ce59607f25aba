//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use yamlcfg::BareVars;

#[derive(Parser)]
#[command(name = "yamlcfg")]
#[command(about = "Expand and check YAML configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  yamlcfg expand config.yaml\n  yamlcfg refs config.yaml\n  yamlcfg check config.yaml --format json\n"
)]
pub struct Cli {
    /// Also expand bare $NAME references (braced ${NAME} references are always expanded)
    #[arg(long, global = true, env = "YAMLCFG_BARE_VARS")]
    pub bare_vars: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn bare_vars_policy(&self) -> BareVars {
        if self.bare_vars {
            BareVars::Expand
        } else {
            BareVars::Keep
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the file with environment references expanded
    Expand {
        /// Configuration file to read
        file: PathBuf,
    },

    /// List environment references and whether each variable is set
    Refs {
        /// Configuration file to read
        file: PathBuf,
    },

    /// Expand and parse the file, then print the resulting document
    Check {
        /// Configuration file to read
        file: PathBuf,

        /// Output format for the parsed document
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}
