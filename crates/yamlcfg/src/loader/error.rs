//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Tag every pipeline failure with the stage that produced it.
//! - Keep the underlying cause reachable through `Error::source`.
//!
//! Invariants:
//! - Display output starts with a fixed stage prefix (`reading config file`,
//!   `reading config from embedded resource`, `unmarshalling config`,
//!   `validating config`) so callers can match on it.
//! - Validation messages are reproduced verbatim after the prefix.

use std::path::PathBuf;
use thiserror::Error;

use crate::source::ResourceError;
use crate::validate::BoxError;

/// Pipeline step that produced a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Obtaining bytes from a file or resource set.
    Read,
    /// Turning expanded text into the target type.
    Decode,
    /// Running the target's [`Validate`](crate::Validate) hook.
    Validate,
}

/// Errors that can occur while loading a configuration value.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("reading config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading config from embedded resource: {0}")]
    Embedded(#[from] ResourceError),

    #[error("unmarshalling config: {0}")]
    Decode(#[from] DecodeError),

    #[error("validating config: {0}")]
    Validate(#[source] BoxError),
}

impl LoadError {
    /// The stage at which loading stopped.
    pub fn stage(&self) -> Stage {
        match self {
            LoadError::Read { .. } | LoadError::Embedded(_) => Stage::Read,
            LoadError::Decode(_) => Stage::Decode,
            LoadError::Validate(_) => Stage::Validate,
        }
    }
}

/// Errors produced while decoding expanded text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("yaml: invalid UTF-8 in config: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("yaml: {0}")]
    Yaml(#[source] serde_yaml::Error),

    /// Keys present in the document with no matching field, as dotted paths.
    #[error("yaml: unknown field(s): {}", paths.join(", "))]
    UnknownFields { paths: Vec<String> },

    /// The document was empty, only comments, or an explicit null.
    #[error("yaml: document is empty")]
    EmptyDocument,

    #[error("yaml: serializing defaults: {0}")]
    Defaults(#[source] serde_yaml::Error),

    /// The serialized defaults do not decode back into the target type,
    /// usually because a field is omitted by `skip_serializing_if`.
    #[error("yaml: defaults do not decode back into the target type: {0}")]
    DefaultsRoundTrip(#[source] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_stage_prefixes() {
        let read = LoadError::Read {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(read.stage(), Stage::Read);
        assert_eq!(
            read.to_string(),
            "reading config file missing.yaml: no such file"
        );
        assert!(read.source().is_some());

        let embedded = LoadError::from(ResourceError::NotFound {
            path: "a.yaml".to_string(),
        });
        assert_eq!(embedded.stage(), Stage::Read);
        assert_eq!(
            embedded.to_string(),
            "reading config from embedded resource: open a.yaml: file does not exist"
        );

        let decode = LoadError::from(DecodeError::UnknownFields {
            paths: vec!["extra".to_string(), "server.port2".to_string()],
        });
        assert_eq!(decode.stage(), Stage::Decode);
        assert_eq!(
            decode.to_string(),
            "unmarshalling config: yaml: unknown field(s): extra, server.port2"
        );

        let validate = LoadError::Validate("this is going to fail".into());
        assert_eq!(validate.stage(), Stage::Validate);
        assert_eq!(
            validate.to_string(),
            "validating config: this is going to fail"
        );
    }

    #[test]
    fn test_utf8_error_keeps_yaml_prefix() {
        let utf8 = std::str::from_utf8(b"\x89PNG\r\n").unwrap_err();
        let err = LoadError::from(DecodeError::from(utf8));
        assert_eq!(err.stage(), Stage::Decode);
        assert!(
            err.to_string()
                .starts_with("unmarshalling config: yaml: invalid UTF-8 in config: "),
            "unexpected message: {err}"
        );
    }
}
