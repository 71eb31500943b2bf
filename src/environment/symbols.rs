//! Declared class and constant symbols.

use crate::error::{RequisiteError, Result};
use std::collections::HashSet;

/// Check that `name` is a well-formed, optionally namespaced identifier.
///
/// Namespace separators are `\`; a single leading separator is allowed.
/// Identifiers start with a letter, `_` or a non-ASCII character.
fn is_valid_identifier_path(name: &str) -> bool {
    let name = name.strip_prefix('\\').unwrap_or(name);
    !name.is_empty()
        && name.split('\\').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() || first == '_' || !first.is_ascii() => {
                    chars.all(|c| c.is_alphanumeric() || c == '_' || !c.is_ascii())
                }
                _ => false,
            }
        })
}

fn normalize_class(name: &str) -> String {
    name.strip_prefix('\\').unwrap_or(name).to_lowercase()
}

/// Known symbols of the host runtime.
///
/// Class names compare case-insensitively and ignore a leading `\`.
/// Constants compare exactly; `Class::CONSTANT` names are accepted.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    classes: HashSet<String>,
    constants: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.classes
            .extend(classes.into_iter().map(|c| normalize_class(c.as_ref())));
        self
    }

    pub fn with_constants<I, S>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constants.extend(constants.into_iter().map(Into::into));
        self
    }

    /// Whether a class is known.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` when `name` is not a class name at all.
    pub fn has_class(&self, name: &str) -> Result<bool> {
        if !is_valid_identifier_path(name) {
            return Err(RequisiteError::InvalidSymbol {
                name: name.to_string(),
            });
        }
        Ok(self.classes.contains(&normalize_class(name)))
    }

    /// Whether a constant is defined.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbol` when `name` is not a constant name.
    pub fn has_constant(&self, name: &str) -> Result<bool> {
        let valid = match name.split_once("::") {
            Some((class, constant)) => {
                is_valid_identifier_path(class) && is_valid_identifier_path(constant)
            }
            None => is_valid_identifier_path(name),
        };
        if !valid {
            return Err(RequisiteError::InvalidSymbol {
                name: name.to_string(),
            });
        }
        Ok(self.constants.contains(name))
    }
}
