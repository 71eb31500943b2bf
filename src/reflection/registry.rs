//! In-memory marker registry.

use serde::{Deserialize, Serialize};

use super::{MarkerSource, Scope};
use crate::error::{RequisiteError, Result};
use crate::requirements::{Marker, MarkerKind};

/// A test method and the markers declared on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestMethod {
    pub name: String,

    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl TestMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }
}

/// A test class, its class-level markers and its methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestClass {
    #[serde(rename = "class")]
    pub name: String,

    #[serde(default)]
    pub markers: Vec<Marker>,

    #[serde(default)]
    pub methods: Vec<TestMethod>,
}

impl TestClass {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            markers: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn with_method(mut self, method: TestMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn method(&self, name: &str) -> Option<&TestMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

fn of_kind(markers: &[Marker], kind: MarkerKind) -> Vec<Marker> {
    markers.iter().filter(|m| m.kind == kind).cloned().collect()
}

/// Declaration-ordered store of test classes.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    classes: Vec<TestClass>,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes(classes: Vec<TestClass>) -> Self {
        Self { classes }
    }

    /// Register a test class. A class registered twice replaces the first.
    pub fn register(&mut self, class: TestClass) {
        match self.classes.iter_mut().find(|c| c.name == class.name) {
            Some(existing) => *existing = class,
            None => self.classes.push(class),
        }
    }

    pub fn classes(&self) -> &[TestClass] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&TestClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn require_class(&self, name: &str) -> Result<&TestClass> {
        self.class(name)
            .ok_or_else(|| RequisiteError::UnknownTestClass {
                class: name.to_string(),
            })
    }
}

impl MarkerSource for MarkerRegistry {
    fn markers(&self, scope: Scope<'_>, kind: MarkerKind) -> Result<Vec<Marker>> {
        match scope {
            Scope::Class(class) => Ok(of_kind(&self.require_class(class)?.markers, kind)),
            Scope::Method { class, method } => {
                let test_class = self.require_class(class)?;
                let test_method =
                    test_class
                        .method(method)
                        .ok_or_else(|| RequisiteError::UnknownTestMethod {
                            class: class.to_string(),
                            method: method.to_string(),
                        })?;
                Ok(of_kind(&test_method.markers, kind))
            }
        }
    }
}
