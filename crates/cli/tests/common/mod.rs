//! Shared test utilities for yamlcfg CLI integration tests.
//!
//! Invariants / Assumptions:
//! - Variables used by the fixtures are removed so host settings cannot leak in.

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `yamlcfg` command for integration testing.
pub fn yamlcfg_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("yamlcfg");

    cmd.env_remove("YAMLCFG_BARE_VARS")
        .env_remove("YAMLCFG_CLI_HOST")
        .env_remove("YAMLCFG_CLI_PORT")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `config.yaml` in a fresh temporary directory.
pub fn config_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, contents).unwrap();
    (dir, path)
}
