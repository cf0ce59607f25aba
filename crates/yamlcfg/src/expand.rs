//! Environment variable expansion for raw configuration text.
//!
//! Responsibilities:
//! - Replace `${NAME}` and `${NAME:default}` references with values from the
//!   process environment or a caller-supplied lookup.
//! - Optionally replace bare `$NAME` tokens when [`BareVars::Expand`] is selected.
//! - List the references a text contains without substituting them.
//!
//! Does NOT handle:
//! - Nested references, escaping, or any other shell-style expansion.
//! - Interpreting the expanded text (see `loader`).
//!
//! Invariants:
//! - A `$` that is not part of a recognised reference is copied through unchanged.
//! - A variable that is set, even to the empty string, wins over its default.
//! - Substituted values are never rescanned.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::fmt;
use std::ops::Range;
use std::sync::{Arc, LazyLock};

/// `${NAME}` or `${NAME:default}`.
static BRACED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)(?::([^}]*))?\}").expect("braced reference pattern")
});

/// Braced references first, then bare `$NAME`.
static BRACED_OR_BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z0-9_]+)(?::([^}]*))?\}|\$([A-Za-z0-9_]+)")
        .expect("braced or bare reference pattern")
});

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

/// How bare `$NAME` tokens (no braces) are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BareVars {
    /// Leave `$NAME` untouched so literal dollar signs in passwords or URLs survive.
    #[default]
    Keep,
    /// Replace `$NAME` with the variable's value, or the empty string when unset.
    Expand,
}

/// A single variable reference found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    /// Variable name.
    pub name: String,
    /// Default text after the `:`, if the reference had one.
    pub default: Option<String>,
    /// Byte range of the whole reference in the scanned text.
    pub span: Range<usize>,
    /// `false` for a bare `$NAME` token.
    pub braced: bool,
}

/// Expands variable references in text.
///
/// The default expander reads the process environment and only expands braced
/// references. Cloning is cheap; a custom lookup is shared behind an `Arc`.
#[derive(Clone, Default)]
pub struct Expander {
    bare_vars: BareVars,
    lookup: Option<Arc<Lookup>>,
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander")
            .field("bare_vars", &self.bare_vars)
            .field("custom_lookup", &self.lookup.is_some())
            .finish()
    }
}

impl Expander {
    /// Create an expander backed by the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bare `$NAME` policy.
    pub fn bare_vars(mut self, policy: BareVars) -> Self {
        self.bare_vars = policy;
        self
    }

    /// Resolve names with `lookup` instead of the process environment.
    ///
    /// `lookup` returning `Some("")` means "set to empty" and suppresses the default.
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.lookup = Some(Arc::new(lookup));
        self
    }

    /// The active bare `$NAME` policy.
    pub fn bare_vars_policy(&self) -> BareVars {
        self.bare_vars
    }

    /// Expand every reference in `input`, left to right.
    ///
    /// Returns the input borrowed when it contains no reference.
    pub fn expand<'a>(&self, input: &'a str) -> Cow<'a, str> {
        self.pattern()
            .replace_all(input, |caps: &Captures<'_>| self.resolve(caps))
    }

    /// List every reference in `input` in order of appearance.
    pub fn references(&self, input: &str) -> Vec<VarRef> {
        self.pattern()
            .captures_iter(input)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let (name, default, braced) = match caps.get(1) {
                    Some(name) => (name, caps.get(2).map(|d| d.as_str().to_string()), true),
                    None => (caps.get(3)?, None, false),
                };
                Some(VarRef {
                    name: name.as_str().to_string(),
                    default,
                    span: whole.range(),
                    braced,
                })
            })
            .collect()
    }

    /// Look up a single variable through this expander's source.
    pub fn lookup(&self, name: &str) -> Option<String> {
        match &self.lookup {
            Some(lookup) => lookup(name),
            // Non-UTF-8 values count as unset.
            None => std::env::var(name).ok(),
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self.bare_vars {
            BareVars::Keep => &BRACED,
            BareVars::Expand => &BRACED_OR_BARE,
        }
    }

    fn resolve(&self, caps: &Captures<'_>) -> String {
        if let Some(name) = caps.get(1) {
            return self.lookup(name.as_str()).unwrap_or_else(|| {
                caps.get(2)
                    .map(|default| default.as_str().to_string())
                    .unwrap_or_default()
            });
        }
        match caps.get(3) {
            Some(name) => self.lookup(name.as_str()).unwrap_or_default(),
            None => caps[0].to_string(),
        }
    }
}

/// Expand `${NAME}` and `${NAME:default}` against the process environment.
///
/// Bare `$NAME` tokens are left as they are.
pub fn expand_env(input: &str) -> Cow<'_, str> {
    Expander::new().expand(input)
}
