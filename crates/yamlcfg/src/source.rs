//! Byte sources for configuration documents.
//!
//! Responsibilities:
//! - Read configuration bytes from the local filesystem.
//! - Look up configuration bytes in in-process resource sets, such as files
//!   compiled into the binary with [`embed_files!`](crate::embed_files).
//!
//! Does NOT handle:
//! - Decoding or expanding the bytes (see `loader` and `expand`).
//!
//! Invariants:
//! - Resource paths are slash-separated and relative; a leading `./` is ignored.
//! - Paths with empty, `.` or `..` segments are rejected before any lookup.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use thiserror::Error;

use crate::loader::LoadError;

/// Errors returned by a [`ResourceSet`] lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("open {path}: file does not exist")]
    NotFound { path: String },

    #[error("open {path}: invalid resource path")]
    InvalidPath { path: String },
}

/// An in-process collection of named byte blobs.
pub trait ResourceSet {
    /// Return the bytes stored under `path`.
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, ResourceError>;
}

impl<R: ResourceSet + ?Sized> ResourceSet for &R {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, ResourceError> {
        (**self).read(path)
    }
}

impl<S: std::hash::BuildHasher> ResourceSet for HashMap<String, Vec<u8>, S> {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, ResourceError> {
        let key = normalize_path(path)?;
        self.get(key)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or_else(|| not_found(path))
    }
}

impl ResourceSet for BTreeMap<String, Vec<u8>> {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, ResourceError> {
        let key = normalize_path(path)?;
        self.get(key)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or_else(|| not_found(path))
    }
}

/// A static table of files compiled into the binary.
///
/// Usually built with [`embed_files!`](crate::embed_files):
///
/// ```ignore
/// static CONFIGS: yamlcfg::EmbeddedFiles = yamlcfg::embed_files! {
///     "config/app.yaml" => "../config/app.yaml",
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFiles {
    entries: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedFiles {
    /// Wrap a table of `(logical path, contents)` pairs.
    pub const fn new(entries: &'static [(&'static str, &'static [u8])]) -> Self {
        Self { entries }
    }

    /// Logical paths in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(path, _)| *path)
    }

    /// Contents stored under `path`, if any.
    pub fn get(&self, path: &str) -> Option<&'static [u8]> {
        let key = normalize_path(path).ok()?;
        self.entries
            .iter()
            .find(|(entry, _)| entry.strip_prefix("./").unwrap_or(entry) == key)
            .map(|(_, bytes)| *bytes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceSet for EmbeddedFiles {
    fn read(&self, path: &str) -> Result<Cow<'_, [u8]>, ResourceError> {
        normalize_path(path)?;
        self.get(path).map(Cow::Borrowed).ok_or_else(|| not_found(path))
    }
}

/// Build an [`EmbeddedFiles`] table from `"logical/path" => "file/on/disk"` pairs.
///
/// Disk paths are resolved by `include_bytes!`, relative to the invoking file.
#[macro_export]
macro_rules! embed_files {
    ($($logical:literal => $file:expr),* $(,)?) => {{
        static ENTRIES: &[(&str, &[u8])] = &[$(($logical, include_bytes!($file) as &[u8])),*];
        $crate::EmbeddedFiles::new(ENTRIES)
    }};
}

/// Read a configuration file from disk, tagging failures with the read stage.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read config file");
    Ok(bytes)
}

pub(crate) fn normalize_path(path: &str) -> Result<&str, ResourceError> {
    let trimmed = path.strip_prefix("./").unwrap_or(path);
    let valid = !trimmed.is_empty()
        && trimmed
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..");
    if valid {
        Ok(trimmed)
    } else {
        Err(ResourceError::InvalidPath {
            path: path.to_string(),
        })
    }
}

fn not_found(path: &str) -> ResourceError {
    ResourceError::NotFound {
        path: path.to_string(),
    }
}
