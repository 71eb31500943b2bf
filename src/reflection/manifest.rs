//! YAML manifest loading.
//!
//! A manifest declares test classes with their markers, plus everything the
//! checks run against: parameters, symbols, variables and packages.
//!
//! ```yaml
//! parameters:
//!   behaviorOnMissingClasses: fail
//! environment:
//!   classes: [Acme\Client]
//!   constants: [ACME_DEBUG]
//!   variables:
//!     ACME_TOKEN: secret
//! packages:
//!   - name: acme/core
//!     version: 2.1.0
//! tests:
//!   - class: Acme\ClientTest
//!     markers:
//!       - kind: requires_class
//!         subject: Acme\Client
//!     methods:
//!       - name: testSend
//!         markers:
//!           - kind: requires_package
//!             subject: acme/core
//!             version: ">=2.0"
//! ```

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use super::registry::{MarkerRegistry, TestClass};
use crate::config::Parameters;
use crate::environment::SymbolTable;
use crate::error::{RequisiteError, Result};
use crate::packages::{InstalledPackage, InstalledPackages};

/// Symbols and variables declared by a manifest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestEnvironment {
    pub classes: Vec<String>,
    pub constants: Vec<String>,
    pub variables: HashMap<String, String>,
}

/// Parsed manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Extension parameters. Scalar values only.
    pub parameters: BTreeMap<String, Value>,

    pub environment: ManifestEnvironment,

    /// Installed packages. `None` leaves the package index to the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<Vec<InstalledPackage>>,

    pub tests: Vec<TestClass>,
}

impl Manifest {
    /// Load a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file doesn't exist.
    /// Returns `ManifestParseError` if the YAML is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RequisiteError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RequisiteError::Io(e)
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content.
    ///
    /// `source_path` is only used for error reporting. An empty document is
    /// an empty manifest.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Self =
            serde_yaml::from_str(content).map_err(|e| RequisiteError::ManifestParseError {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded manifest {} with {} test classes",
            source_path.display(),
            manifest.tests.len()
        );
        Ok(manifest)
    }

    /// Parameters as flat strings.
    ///
    /// Booleans and numbers are stringified; nulls and nested values are
    /// ignored with a warning.
    pub fn parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        for (name, value) in &self.parameters {
            match scalar_to_string(value) {
                Some(value) => parameters.insert(name.as_str(), value),
                None => tracing::warn!("Ignoring non-scalar parameter '{}'", name),
            }
        }
        parameters
    }

    pub fn registry(&self) -> MarkerRegistry {
        let mut registry = MarkerRegistry::new();
        for class in &self.tests {
            registry.register(class.clone());
        }
        registry
    }

    pub fn symbols(&self) -> SymbolTable {
        SymbolTable::new()
            .with_classes(&self.environment.classes)
            .with_constants(self.environment.constants.iter().cloned())
    }

    /// Package index declared inline, if any.
    pub fn package_index(&self) -> Option<InstalledPackages> {
        self.packages
            .as_ref()
            .map(|packages| InstalledPackages::from_entries(packages.clone()))
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
