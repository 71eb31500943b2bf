//! Check command implementation.
//!
//! The `requisite check` command feeds every test method of a manifest
//! through the precondition lifecycle and reports the outcome of each.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::engine::{Outcome, PreconditionRunner};
use crate::environment::SystemEnvironment;
use crate::error::{RequisiteError, Result};
use crate::packages::InstalledPackages;
use crate::reflection::Manifest;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::loading::{behavior_settings, load_manifest, parameters, resolve_path};

/// Result of one test method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestReport {
    pub class: String,
    pub method: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TestReport {
    fn new(class: &str, method: &str, outcome: &Outcome) -> Self {
        Self {
            class: class.to_string(),
            method: method.to_string(),
            status: outcome.status().to_string(),
            message: outcome.message().map(str::to_string),
        }
    }

    pub fn test_name(&self) -> String {
        format!("{}::{}", self.class, self.method)
    }
}

/// Counts per status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CheckSummary {
    pub fn from_reports(reports: &[TestReport]) -> Self {
        let mut summary = Self::default();
        for report in reports {
            match report.status.as_str() {
                "pass" => summary.passed += 1,
                "skip" => summary.skipped += 1,
                _ => summary.failed += 1,
            }
        }
        summary
    }
}

/// The check command implementation.
pub struct CheckCommand {
    working_dir: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(working_dir: &Path, args: CheckArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn package_index(&self, manifest: &Manifest) -> Result<InstalledPackages> {
        match &self.args.lockfile {
            Some(path) => InstalledPackages::load_optional(&resolve_path(&self.working_dir, path)),
            None => Ok(manifest.package_index().unwrap_or_default()),
        }
    }

    fn environment(&self, manifest: &Manifest) -> Result<SystemEnvironment> {
        let mut environment = SystemEnvironment::new()
            .with_symbols(manifest.symbols())
            .with_loaded_vars(manifest.environment.variables.clone());
        for path in &self.args.env_files {
            environment = environment.with_env_file(&resolve_path(&self.working_dir, path))?;
        }
        Ok(environment)
    }

    /// Run every test method of `manifest` through a fresh runner.
    pub fn run(&self, manifest: &Manifest, ui: &mut dyn UserInterface) -> Result<Vec<TestReport>> {
        let params = parameters(manifest, &self.args.params)?;
        let settings = behavior_settings(&params, ui);

        let mut runner = PreconditionRunner::new(
            Box::new(manifest.registry()),
            Box::new(self.environment(manifest)?),
            Box::new(self.package_index(manifest)?),
        )
        .with_builtin_tracers(&settings);

        let mut reports = Vec::new();
        for class in &manifest.tests {
            for method in &class.methods {
                let outcome = runner.prepare_test(&class.name, &method.name)?;
                reports.push(TestReport::new(&class.name, &method.name, &outcome));
            }
        }
        Ok(reports)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(manifest) = load_manifest(&self.working_dir, &self.args.manifest, ui)? else {
            return Ok(CommandResult::failure(2));
        };

        let reports = self.run(&manifest, ui)?;
        let summary = CheckSummary::from_reports(&reports);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&reports).map_err(|e| RequisiteError::Other(e.into()))?;
            ui.message(&json);
        } else {
            for report in &reports {
                ui.result(&report.status, &report.test_name(), report.message.as_deref());
            }
            ui.message("");
            ui.message(&format!(
                "{} passed, {} skipped, {} failed",
                summary.passed, summary.skipped, summary.failed
            ));
        }

        if summary.failed > 0 {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
