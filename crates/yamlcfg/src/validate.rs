//! Post-decode validation hook.

use std::collections::{BTreeMap, HashMap};

/// Boxed error returned by [`Validate::validate`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Self-check run once on a fully decoded configuration value.
///
/// The provided method accepts everything, so a type without invariants opts
/// in with an empty impl:
///
/// ```
/// #[derive(serde::Deserialize)]
/// struct Plain {
///     name: String,
/// }
///
/// impl yamlcfg::Validate for Plain {}
/// ```
///
/// Whatever the method returns is surfaced verbatim after the
/// `validating config: ` prefix.
pub trait Validate {
    fn validate(&self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl Validate for serde_yaml::Value {}

impl Validate for serde_json::Value {}

impl<K, V, S> Validate for HashMap<K, V, S> {}

impl<K, V> Validate for BTreeMap<K, V> {}

impl<T: Validate> Validate for Box<T> {
    fn validate(&self) -> Result<(), BoxError> {
        (**self).validate()
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<(), BoxError> {
        self.iter().try_for_each(|item| item.validate())
    }
}
