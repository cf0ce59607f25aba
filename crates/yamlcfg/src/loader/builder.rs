//! Builder pattern for configuration loading.
//!
//! Responsibilities:
//! - Run the read → expand → decode → validate pipeline for every byte source.
//! - Carry the [`Expander`] used for environment references.
//!
//! Does NOT handle:
//! - Reference syntax (see `expand.rs`).
//! - Strict decoding and defaults merging (see `decode.rs`).
//!
//! Invariants:
//! - Each call reads its source once and decodes once.
//! - A value is returned only after it decoded cleanly and passed validation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::decode;
use super::error::{DecodeError, LoadError};
use crate::expand::{BareVars, Expander};
use crate::source::{ResourceSet, read_file};
use crate::validate::Validate;

/// Configuration loader with a configurable environment expander.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    expander: Expander,
}

impl ConfigLoader {
    /// Create a loader that expands braced references from the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the expander.
    pub fn with_expander(mut self, expander: Expander) -> Self {
        self.expander = expander;
        self
    }

    /// Set the bare `$NAME` policy on the current expander.
    pub fn with_bare_vars(mut self, policy: BareVars) -> Self {
        self.expander = self.expander.bare_vars(policy);
        self
    }

    pub fn expander(&self) -> &Expander {
        &self.expander
    }

    /// Load `T` from a file on disk.
    pub fn load<T>(&self, path: impl AsRef<Path>) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Validate,
    {
        let bytes = read_file(path)?;
        self.from_slice(&bytes)
    }

    /// Load `T` from an in-process resource set.
    pub fn load_embedded<T, R>(&self, resources: &R, path: &str) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Validate,
        R: ResourceSet + ?Sized,
    {
        let bytes = resources.read(path)?;
        tracing::debug!(path, bytes = bytes.len(), "read embedded config");
        self.from_slice(&bytes)
    }

    /// Load a file on disk over the fields already set in `defaults`.
    ///
    /// Fields absent from the file keep their value from `defaults`.
    ///
    /// `defaults` is merged through its serialized form and must decode back
    /// into `T` by itself; otherwise this fails with
    /// [`DecodeError::DefaultsRoundTrip`]. Fields marked `#[serde(skip)]` are
    /// not carried over and come back as their `Default` value.
    pub fn load_with_defaults<T>(&self, defaults: T, path: impl AsRef<Path>) -> Result<T, LoadError>
    where
        T: Serialize + DeserializeOwned + Validate,
    {
        let bytes = read_file(path)?;
        self.from_slice_with_defaults(defaults, &bytes)
    }

    /// Expand, decode and validate raw bytes.
    pub fn from_slice<T>(&self, bytes: &[u8]) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Validate,
    {
        let value = self.unmarshal(bytes)?;
        validated(value)
    }

    /// Expand, decode over `defaults`, and validate raw bytes.
    ///
    /// Same merge rules as [`load_with_defaults`](Self::load_with_defaults).
    pub fn from_slice_with_defaults<T>(&self, defaults: T, bytes: &[u8]) -> Result<T, LoadError>
    where
        T: Serialize + DeserializeOwned + Validate,
    {
        let text = self.expanded(bytes)?;
        let value = decode::decode_with_defaults(&defaults, &text)?;
        validated(value)
    }

    /// Expand and strictly decode raw bytes without running validation.
    pub fn unmarshal<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        let text = self.expanded(bytes)?;
        decode::decode(&text)
    }

    /// Read a file and return its text with references expanded.
    pub fn expand_file(&self, path: impl AsRef<Path>) -> Result<String, LoadError> {
        let bytes = read_file(path)?;
        Ok(self.expanded(&bytes)?)
    }

    fn expanded(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        let expanded = self.expander.expand(text);
        tracing::debug!(
            bytes = bytes.len(),
            expanded_bytes = expanded.len(),
            substituted = !matches!(expanded, std::borrow::Cow::Borrowed(_)),
            "expanded config text"
        );
        Ok(expanded.into_owned())
    }
}

fn validated<T: Validate>(value: T) -> Result<T, LoadError> {
    value.validate().map_err(LoadError::Validate)?;
    Ok(value)
}
