//! Configuration loading pipeline.
//!
//! Responsibilities:
//! - Obtain bytes from a file, a resource set, or the caller.
//! - Expand environment references, decode strictly, and validate.
//! - Offer free-function shortcuts over a default [`ConfigLoader`].
//!
//! Does NOT handle:
//! - Installing a tracing subscriber or reporting errors to the user.
//!
//! Invariants:
//! - Every failure is tagged with the stage that produced it.
//! - No value is returned alongside an error.

mod builder;
mod decode;
mod error;

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

pub use builder::ConfigLoader;
pub use error::{DecodeError, LoadError, Stage};

use crate::source::ResourceSet;
use crate::validate::Validate;

/// Load `T` from a YAML file on disk.
pub fn load<T>(path: impl AsRef<Path>) -> Result<T, LoadError>
where
    T: DeserializeOwned + Validate,
{
    ConfigLoader::new().load(path)
}

/// Load `T` from a resource set such as [`EmbeddedFiles`](crate::EmbeddedFiles).
pub fn load_embedded<T, R>(resources: &R, path: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned + Validate,
    R: ResourceSet + ?Sized,
{
    ConfigLoader::new().load_embedded(resources, path)
}

/// Load a YAML file over the fields already populated in `defaults`.
///
/// See [`ConfigLoader::load_with_defaults`] for how `defaults` is merged.
pub fn load_with_defaults<T>(defaults: T, path: impl AsRef<Path>) -> Result<T, LoadError>
where
    T: Serialize + DeserializeOwned + Validate,
{
    ConfigLoader::new().load_with_defaults(defaults, path)
}

/// Expand, decode and validate YAML bytes.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T, LoadError>
where
    T: DeserializeOwned + Validate,
{
    ConfigLoader::new().from_slice(bytes)
}

/// Expand, decode and validate YAML text.
pub fn from_str<T>(text: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned + Validate,
{
    from_slice(text.as_bytes())
}

/// Expand, decode over `defaults`, and validate YAML bytes.
///
/// See [`ConfigLoader::load_with_defaults`] for how `defaults` is merged.
pub fn from_slice_with_defaults<T>(defaults: T, bytes: &[u8]) -> Result<T, LoadError>
where
    T: Serialize + DeserializeOwned + Validate,
{
    ConfigLoader::new().from_slice_with_defaults(defaults, bytes)
}

/// Expand and strictly decode YAML bytes, skipping validation.
pub fn unmarshal<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    ConfigLoader::new().unmarshal(bytes)
}
