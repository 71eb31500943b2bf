//! Marker introspection.
//!
//! The engine asks a [`MarkerSource`] for the markers declared on a test
//! class or test method. Sources return markers in declaration order and do
//! no validation of their own.
//!
//! # Modules
//!
//! - [`manifest`] - YAML manifests describing test classes and their markers
//! - [`registry`] - In-memory marker registry

pub mod manifest;
pub mod registry;

pub use manifest::{Manifest, ManifestEnvironment};
pub use registry::{MarkerRegistry, TestClass, TestMethod};

use crate::error::Result;
use crate::requirements::{Marker, MarkerKind};

/// Where markers are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Markers on the test class itself.
    Class(&'a str),
    /// Markers on one test method.
    Method { class: &'a str, method: &'a str },
}

impl Scope<'_> {
    pub fn class(&self) -> &str {
        match *self {
            Scope::Class(class) | Scope::Method { class, .. } => class,
        }
    }
}

impl std::fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scope::Class(class) => write!(f, "{}", class),
            Scope::Method { class, method } => write!(f, "{}::{}", class, method),
        }
    }
}

/// Introspection service returning declared markers.
pub trait MarkerSource {
    /// Markers of `kind` declared at `scope`, in declaration order.
    ///
    /// # Errors
    ///
    /// Unknown classes or methods are errors; by the time the engine asks,
    /// the test is known to exist.
    fn markers(&self, scope: Scope<'_>, kind: MarkerKind) -> Result<Vec<Marker>>;
}
