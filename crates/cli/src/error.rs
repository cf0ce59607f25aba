//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map `LoadError` stages to exit codes.
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use yamlcfg::{LoadError, Stage};

/// Structured exit codes for yamlcfg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The configuration file could not be read.
    ReadFailed = 2,

    /// The configuration could not be expanded or parsed.
    DecodeFailed = 3,

    /// The configuration failed validation.
    ValidationFailed = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<Stage> for ExitCode {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Read => ExitCode::ReadFailed,
            Stage::Decode => ExitCode::DecodeFailed,
            Stage::Validate => ExitCode::ValidationFailed,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `LoadError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadError>())
            .map_or(ExitCode::GeneralError, |err| ExitCode::from(err.stage()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use yamlcfg::{DecodeError, ResourceError};

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ReadFailed.as_i32(), 2);
        assert_eq!(ExitCode::ValidationFailed.as_i32(), 4);
    }

    #[test]
    fn test_from_load_error_stages() {
        let read = anyhow::Error::from(LoadError::from(ResourceError::NotFound {
            path: "a.yaml".to_string(),
        }));
        assert_eq!(read.exit_code(), ExitCode::ReadFailed);

        let decode = anyhow::Error::from(LoadError::from(DecodeError::EmptyDocument));
        assert_eq!(decode.exit_code(), ExitCode::DecodeFailed);

        let validate = anyhow::Error::from(LoadError::Validate("bad".into()));
        assert_eq!(validate.exit_code(), ExitCode::ValidationFailed);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), LoadError> = Err(LoadError::from(DecodeError::EmptyDocument));
        let err = result.context("checking app.yaml").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::DecodeFailed);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
