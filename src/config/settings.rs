//! Per-kind default behaviors and deprecation notices.

use std::collections::{HashMap, HashSet};

use super::migration::{Migration, MigrationResult};
use super::parameters::ParameterSource;
use crate::requirements::{MarkerKind, OutcomeBehavior};

/// Receiver for deprecation notices.
pub trait NoticeSink {
    fn deprecation(&mut self, message: &str);
}

impl NoticeSink for Vec<String> {
    fn deprecation(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

/// Tracks which notices were already printed during this run.
#[derive(Debug, Default)]
pub struct Notices {
    printed: HashSet<String>,
    colorize: bool,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Send `message` to `sink` unless a notice for `key` was already sent.
    ///
    /// Returns whether the notice was sent.
    pub fn emit(&mut self, key: &str, message: &str, sink: &mut dyn NoticeSink) -> bool {
        if !self.printed.insert(key.to_string()) {
            return false;
        }
        sink.deprecation(message);
        true
    }

    fn emit_migration(&mut self, result: &MigrationResult, sink: &mut dyn NoticeSink) {
        let Some(diff) = result.diff(self.colorize) else {
            return;
        };
        let message = format!(
            "The \"{}\" parameter is deprecated and will be removed in a future version. \
             Migrate your configuration:\n{}",
            result.legacy_name(),
            diff
        );
        self.emit(result.legacy_name(), &message, sink);
    }
}

/// Migration from a kind's legacy boolean parameter, if it has one.
pub fn migration_for(kind: MarkerKind) -> Option<Migration> {
    let legacy = kind.legacy_parameter_name()?;
    Some(
        Migration::for_parameter(kind.parameter_name(), legacy)
            .with_value_mapping(OutcomeBehavior::Fail.as_str(), "true", true)
            .with_value_mapping(OutcomeBehavior::Skip.as_str(), "false", true),
    )
}

/// Default outcome behavior per marker kind.
#[derive(Debug, Clone, Default)]
pub struct BehaviorSettings {
    behaviors: HashMap<MarkerKind, OutcomeBehavior>,
    migrations: Vec<MigrationResult>,
}

impl BehaviorSettings {
    /// All kinds default to `Skip`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(mut self, kind: MarkerKind, behavior: OutcomeBehavior) -> Self {
        self.behaviors.insert(kind, behavior);
        self
    }

    /// Resolve behaviors from parameters, migrating legacy ones.
    ///
    /// Each migrated legacy parameter produces one deprecation notice per
    /// `notices` lifetime.
    pub fn resolve(
        parameters: &dyn ParameterSource,
        notices: &mut Notices,
        sink: &mut dyn NoticeSink,
    ) -> Self {
        let mut settings = Self::new();
        let default = OutcomeBehavior::default().as_str();

        for kind in MarkerKind::ALL {
            let value = match migration_for(kind) {
                Some(migration) => {
                    let result = migration.resolve(parameters, Some(default));
                    match result {
                        Some(result) => {
                            if result.was_migrated() {
                                notices.emit_migration(&result, sink);
                                settings.migrations.push(result.clone());
                            }
                            result.value().to_string()
                        }
                        None => default.to_string(),
                    }
                }
                None => parameters
                    .get(kind.parameter_name())
                    .unwrap_or(default)
                    .to_string(),
            };

            let behavior = OutcomeBehavior::parse_or_skip(&value);
            tracing::debug!("Default behavior for {}: {}", kind, behavior);
            settings.behaviors.insert(kind, behavior);
        }

        settings
    }

    pub fn behavior(&self, kind: MarkerKind) -> OutcomeBehavior {
        self.behaviors.get(&kind).copied().unwrap_or_default()
    }

    /// Legacy parameters that were migrated while resolving.
    pub fn migrations(&self) -> &[MigrationResult] {
        &self.migrations
    }
}
