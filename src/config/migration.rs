//! Migration of deprecated parameters.
//!
//! A [`Migration`] maps a legacy parameter onto its replacement, translating
//! values through registered mappings. The resulting [`MigrationResult`]
//! records both values so the change can be shown as a diff.

use console::Style;

use super::parameters::ParameterSource;

#[derive(Debug, Clone)]
struct ValueMapping {
    legacy: String,
    new: String,
    normalize: bool,
}

impl ValueMapping {
    fn matches(&self, raw: &str) -> bool {
        if self.normalize {
            raw.trim().to_lowercase() == self.legacy.to_lowercase()
        } else {
            raw == self.legacy
        }
    }
}

/// Translation from a legacy parameter to a new one.
#[derive(Debug, Clone)]
pub struct Migration {
    new_name: String,
    legacy_name: String,
    mappings: Vec<ValueMapping>,
}

impl Migration {
    pub fn for_parameter(new_name: impl Into<String>, legacy_name: impl Into<String>) -> Self {
        Self {
            new_name: new_name.into(),
            legacy_name: legacy_name.into(),
            mappings: Vec::new(),
        }
    }

    /// Translate `legacy_value` into `new_value`.
    ///
    /// With `normalize`, the legacy value is compared trimmed and
    /// case-insensitively. Mappings are tried in registration order.
    pub fn with_value_mapping(
        mut self,
        new_value: impl Into<String>,
        legacy_value: impl Into<String>,
        normalize: bool,
    ) -> Self {
        self.mappings.push(ValueMapping {
            legacy: legacy_value.into(),
            new: new_value.into(),
            normalize,
        });
        self
    }

    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn legacy_name(&self) -> &str {
        &self.legacy_name
    }

    /// Resolve the effective value.
    ///
    /// The new parameter wins verbatim when set. Otherwise the legacy
    /// parameter is translated (or passed through when no mapping matches).
    /// Without either, `default` is used; without a default there is no
    /// result.
    pub fn resolve(
        &self,
        parameters: &dyn ParameterSource,
        default: Option<&str>,
    ) -> Option<MigrationResult> {
        if let Some(value) = parameters.get(&self.new_name) {
            return Some(self.result(value.to_string(), None));
        }

        let Some(legacy_value) = parameters.get(&self.legacy_name) else {
            return default.map(|value| self.result(value.to_string(), None));
        };

        let value = self
            .mappings
            .iter()
            .find(|mapping| mapping.matches(legacy_value))
            .map(|mapping| mapping.new.clone())
            .unwrap_or_else(|| legacy_value.to_string());

        Some(self.result(value, Some(legacy_value.to_string())))
    }

    fn result(&self, value: String, legacy_value: Option<String>) -> MigrationResult {
        MigrationResult {
            new_name: self.new_name.clone(),
            value,
            legacy_name: self.legacy_name.clone(),
            legacy_value,
        }
    }
}

/// Outcome of resolving a [`Migration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    new_name: String,
    value: String,
    legacy_name: String,
    legacy_value: Option<String>,
}

impl MigrationResult {
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    pub fn legacy_name(&self) -> &str {
        &self.legacy_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn legacy_value(&self) -> Option<&str> {
        self.legacy_value.as_deref()
    }

    /// True when a legacy value was used and differs from the result.
    pub fn was_migrated(&self) -> bool {
        self.legacy_value
            .as_deref()
            .is_some_and(|legacy| legacy != self.value)
    }

    /// Two-line diff from the legacy to the new parameter.
    ///
    /// Returns `None` when nothing was migrated.
    pub fn diff(&self, colorize: bool) -> Option<String> {
        if !self.was_migrated() {
            return None;
        }
        let legacy_value = self.legacy_value.as_deref()?;

        let removed = format!(
            "- <parameter name=\"{}\" value=\"{}\" />",
            self.legacy_name, legacy_value
        );
        let added = format!(
            "+ <parameter name=\"{}\" value=\"{}\" />",
            self.new_name, self.value
        );

        if colorize {
            let red = Style::new().red().force_styling(true);
            let green = Style::new().green().force_styling(true);
            Some(format!(
                "{}\n{}",
                red.apply_to(removed),
                green.apply_to(added)
            ))
        } else {
            Some(format!("{}\n{}", removed, added))
        }
    }
}
