//! Tests for the configuration loading pipeline.
//!
//! Responsibilities:
//! - Test each entry point against the fixtures in `testdata/`.
//! - Test stage tagging of read, decode and validation failures.
//! - Test defaults merging and environment expansion end to end.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::validate::{BoxError, Validate};


#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestStruct {
    pub some_value: String,
    pub second_value: String,
}

impl Validate for TestStruct {}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestStructWithFailingValidation {
    pub some_value: String,
}

impl Validate for TestStructWithFailingValidation {
    fn validate(&self) -> Result<(), BoxError> {
        Err("this is going to fail".into())
    }
}

#[derive(Debug, Deserialize)]
pub struct NameOnly {
    pub name: String,
}

impl Validate for NameOnly {}

/// Absolute path to a fixture under the crate's `testdata/` directory.
pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}
