//! Extension parameters.
//!
//! Parameters are flat `name -> value` strings, the way host runners pass
//! extension configuration.

use crate::error::{RequisiteError, Result};
use std::collections::BTreeMap;

/// Read-only access to configuration parameters.
pub trait ParameterSource {
    /// The raw value of a parameter, if set.
    fn get(&self, name: &str) -> Option<&str>;

    /// Whether a parameter is set.
    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A plain parameter map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style [`Self::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Overlay another parameter set. Values in `overlay` win.
    pub fn merge(mut self, overlay: Parameters) -> Self {
        self.0.extend(overlay.0);
        self
    }

    /// Parse a `NAME=VALUE` override.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when there is no `=` or the name is empty.
    pub fn parse_override(raw: &str) -> Result<(String, String)> {
        match raw.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok((name.trim().to_string(), value.to_string()))
            }
            _ => Err(RequisiteError::InvalidParameter {
                raw: raw.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl ParameterSource for Parameters {
    fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// Interpret a boolean parameter value.
///
/// `true` and `false` match in any case; anything else yields `default`.
pub fn parse_boolean_value(value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => true,
        "false" => false,
        _ => default,
    }
}
