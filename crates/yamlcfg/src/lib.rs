//! Typed YAML configuration loading for application startup code.
//!
//! This crate reads YAML from a file, an embedded resource set, or raw
//! bytes, expands `${NAME}` / `${NAME:default}` environment references,
//! decodes the result strictly into a caller-chosen type, and runs the
//! type's [`Validate`] hook before handing the value back.
//!
//! ```no_run
//! use serde::Deserialize;
//! use yamlcfg::{BoxError, Validate};
//!
//! #[derive(Deserialize)]
//! struct Config {
//!     log_level: String,
//! }
//!
//! impl Validate for Config {
//!     fn validate(&self) -> Result<(), BoxError> {
//!         if self.log_level.is_empty() {
//!             return Err("log_level must not be empty".into());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let cfg: Config = yamlcfg::load("config.yaml")?;
//! # Ok::<(), yamlcfg::LoadError>(())
//! ```

pub mod expand;
mod loader;
pub mod source;
mod validate;

pub use expand::{BareVars, Expander, VarRef, expand_env};
pub use loader::{
    ConfigLoader, DecodeError, LoadError, Stage, from_slice, from_slice_with_defaults, from_str,
    load, load_embedded, load_with_defaults, unmarshal,
};
pub use source::{EmbeddedFiles, ResourceError, ResourceSet, read_file};
pub use validate::{BoxError, Validate};
