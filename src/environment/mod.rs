//! The runtime environment that preconditions are checked against.
//!
//! Validators never talk to the process directly; they go through the
//! [`Environment`] trait so hosts and tests can supply their own view.
//!
//! # Modules
//!
//! - [`env_file`] - Dotenv-style file loading
//! - [`symbols`] - Declared class and constant symbols

pub mod env_file;
pub mod symbols;

pub use env_file::load_env_file;
pub use symbols::SymbolTable;

use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Read access to classes, constants and environment variables.
pub trait Environment {
    /// Whether a class can be loaded.
    ///
    /// Errors signal a failed lookup; callers treat them as "does not exist".
    fn class_exists(&self, name: &str) -> Result<bool>;

    /// Whether a constant is defined.
    ///
    /// Errors signal a failed lookup; callers treat them as "not defined".
    fn constant_defined(&self, name: &str) -> Result<bool>;

    /// Look up a variable in the live process environment.
    ///
    /// `None` means "not set". An empty value counts as set.
    fn var(&self, name: &str) -> Option<String>;

    /// Look up a variable in the loaded environment map.
    ///
    /// Consulted only when [`Environment::var`] reports "not set".
    fn loaded_var(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Environment backed by the current process.
///
/// Classes and constants come from a declared [`SymbolTable`]. The loaded
/// variable map starts as a snapshot of the process environment and can be
/// overlaid with dotenv files.
#[derive(Debug, Clone, Default)]
pub struct SystemEnvironment {
    symbols: SymbolTable,
    loaded: HashMap<String, String>,
}

impl SystemEnvironment {
    /// Create an environment with a snapshot of the current process env.
    pub fn new() -> Self {
        Self {
            symbols: SymbolTable::new(),
            loaded: std::env::vars().collect(),
        }
    }

    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Overlay loaded variables. Later values win.
    pub fn with_loaded_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.loaded.extend(vars);
        self
    }

    /// Overlay variables from a dotenv-style file.
    pub fn with_env_file(self, path: &Path) -> Result<Self> {
        let vars = load_env_file(path)?;
        tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
        Ok(self.with_loaded_vars(vars))
    }
}

impl Environment for SystemEnvironment {
    fn class_exists(&self, name: &str) -> Result<bool> {
        self.symbols.has_class(name)
    }

    fn constant_defined(&self, name: &str) -> Result<bool> {
        self.symbols.has_constant(name)
    }

    fn var(&self, name: &str) -> Option<String> {
        // std::env rejects these keys; they can never be set.
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return None;
        }
        std::env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn loaded_var(&self, name: &str) -> Option<String> {
        self.loaded.get(name).cloned()
    }
}
