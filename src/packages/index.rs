//! Installed package index.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::constraint::VersionConstraint;
use crate::error::{RequisiteError, Result};

/// Query interface over installed packages.
pub trait PackageIndex {
    /// Installed package names, in index order, without duplicates.
    fn installed_packages(&self) -> Vec<String>;

    /// Installed version of a package, or `None` when not installed.
    fn installed_version(&self, package: &str) -> Option<String>;

    /// Whether `version` satisfies `constraint`.
    fn satisfies(&self, version: &str, constraint: &VersionConstraint) -> bool {
        constraint.matches(version)
    }
}

/// One installed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<InstalledPackage>,
}

/// Ordered, in-memory package index.
///
/// When a name appears more than once, the first entry wins.
#[derive(Debug, Clone, Default)]
pub struct InstalledPackages {
    packages: Vec<InstalledPackage>,
}

impl InstalledPackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(packages: Vec<InstalledPackage>) -> Self {
        Self { packages }
    }

    /// Append a package.
    pub fn with_package(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.packages.push(InstalledPackage {
            name: name.into(),
            version: version.into(),
        });
        self
    }

    /// Read `[[package]]` entries from a `Cargo.lock`-style file.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file can't be read and `LockfileParseError` if it
    /// isn't valid TOML of the expected shape.
    pub fn from_lockfile(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let lockfile: Lockfile =
            toml::from_str(&content).map_err(|e| RequisiteError::LockfileParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "Loaded {} packages from {}",
            lockfile.package.len(),
            path.display()
        );
        Ok(Self::from_entries(lockfile.package))
    }

    /// Like [`Self::from_lockfile`], but a missing file yields an empty index.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No package index at {}, assuming no packages", path.display());
            return Ok(Self::new());
        }
        Self::from_lockfile(path)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl PackageIndex for InstalledPackages {
    fn installed_packages(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.packages.len());
        for package in &self.packages {
            if !names.contains(&package.name) {
                names.push(package.name.clone());
            }
        }
        names
    }

    fn installed_version(&self, package: &str) -> Option<String> {
        self.packages
            .iter()
            .find(|p| p.name == package)
            .map(|p| p.version.clone())
    }
}
