//! Manifest and parameter loading shared by commands.

use std::path::{Path, PathBuf};

use crate::config::{BehaviorSettings, Notices, Parameters};
use crate::error::{RequisiteError, Result};
use crate::reflection::Manifest;
use crate::ui::UserInterface;

/// Resolve `path` against the working directory.
pub fn resolve_path(working_dir: &Path, path: &Path) -> PathBuf {
    working_dir.join(path)
}

/// Load the manifest, reporting a missing file through the UI.
///
/// Returns `Ok(None)` when the manifest doesn't exist.
pub fn load_manifest(
    working_dir: &Path,
    path: &Path,
    ui: &mut dyn UserInterface,
) -> Result<Option<Manifest>> {
    match Manifest::load(&resolve_path(working_dir, path)) {
        Ok(manifest) => Ok(Some(manifest)),
        Err(RequisiteError::ManifestNotFound { path }) => {
            ui.error(&format!("No manifest found at {}", path.display()));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Manifest parameters overlaid with `NAME=VALUE` overrides.
pub fn parameters(manifest: &Manifest, overrides: &[String]) -> Result<Parameters> {
    let overrides = overrides
        .iter()
        .map(|raw| Parameters::parse_override(raw))
        .collect::<Result<Parameters>>()?;
    Ok(manifest.parameters().merge(overrides))
}

/// Resolve default behaviors, showing deprecation notices as warnings.
pub fn behavior_settings(parameters: &Parameters, ui: &mut dyn UserInterface) -> BehaviorSettings {
    let mut notices = Notices::new().with_colors(ui.colors_enabled());
    let mut printed: Vec<String> = Vec::new();
    let settings = BehaviorSettings::resolve(parameters, &mut notices, &mut printed);
    for notice in &printed {
        ui.warning(notice);
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParameterSource;
    use crate::requirements::{MarkerKind, OutcomeBehavior};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn missing_manifest_is_reported() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let manifest = load_manifest(temp.path(), Path::new("nope.yml"), &mut ui).unwrap();
        assert!(manifest.is_none());
        assert!(ui.errors()[0].contains("No manifest found"));
    }

    #[test]
    fn overrides_win_over_manifest() {
        let manifest = Manifest::parse(
            "parameters:\n  behaviorOnMissingClasses: skip\n",
            Path::new("m.yml"),
        )
        .unwrap();
        let params = parameters(&manifest, &["behaviorOnMissingClasses=fail".to_string()]).unwrap();
        assert_eq!(params.get("behaviorOnMissingClasses"), Some("fail"));
    }

    #[test]
    fn malformed_override_is_error() {
        let manifest = Manifest::default();
        let result = parameters(&manifest, &["oops".to_string()]);
        assert!(matches!(result, Err(RequisiteError::InvalidParameter { .. })));
    }

    #[test]
    fn notices_become_warnings() {
        let params = Parameters::new().with("failOnMissingClasses", "true");
        let mut ui = MockUI::new();
        let settings = behavior_settings(&params, &mut ui);
        assert_eq!(settings.behavior(MarkerKind::RequiresClass), OutcomeBehavior::Fail);
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_warning("failOnMissingClasses"));
    }
}
