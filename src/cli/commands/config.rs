//! Config command implementation.
//!
//! The `requisite config` command shows the resolved default behavior per
//! marker kind and any legacy parameters that were migrated.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::BehaviorSettings;
use crate::error::{RequisiteError, Result};
use crate::requirements::MarkerKind;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::loading::{behavior_settings, load_manifest, parameters};

#[derive(Debug, Serialize)]
struct ConfigReport {
    behaviors: BTreeMap<&'static str, &'static str>,
    migrated: Vec<MigrationReport>,
}

#[derive(Debug, Serialize)]
struct MigrationReport {
    legacy: String,
    legacy_value: Option<String>,
    parameter: String,
    value: String,
}

impl ConfigReport {
    fn new(settings: &BehaviorSettings) -> Self {
        let behaviors = MarkerKind::ALL
            .iter()
            .map(|&kind| (kind.parameter_name(), settings.behavior(kind).as_str()))
            .collect();
        let migrated = settings
            .migrations()
            .iter()
            .map(|m| MigrationReport {
                legacy: m.legacy_name().to_string(),
                legacy_value: m.legacy_value().map(str::to_string),
                parameter: m.new_name().to_string(),
                value: m.value().to_string(),
            })
            .collect();
        Self {
            behaviors,
            migrated,
        }
    }
}

/// The config command implementation.
pub struct ConfigCommand {
    working_dir: PathBuf,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(working_dir: &Path, args: ConfigArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(manifest) = load_manifest(&self.working_dir, &self.args.manifest, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let params = parameters(&manifest, &self.args.params)?;
        let settings = behavior_settings(&params, ui);

        if self.args.json {
            let json = serde_json::to_string_pretty(&ConfigReport::new(&settings))
                .map_err(|e| RequisiteError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Default behaviors");
        for kind in MarkerKind::ALL {
            ui.message(&format!(
                "  {:<42} {}",
                kind.parameter_name(),
                settings.behavior(kind)
            ));
        }

        let colorize = ui.colors_enabled();
        let diffs: Vec<String> = settings
            .migrations()
            .iter()
            .filter_map(|m| m.diff(colorize))
            .collect();
        if !diffs.is_empty() {
            ui.message("");
            ui.show_header("Migrated parameters");
            for diff in &diffs {
                ui.message(diff);
            }
        }

        Ok(CommandResult::success())
    }
}
