//! Requisite - Declarative test preconditions.
//!
//! Tests and test classes declare what they need (classes, constants,
//! environment variables, packages) or what must be absent. Before a test
//! runs, unmet preconditions turn into a deterministic skip or fail outcome
//! instead of running the test body.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Parameters, legacy parameter migration, default behaviors
//! - [`engine`] - Per-kind resolution with class-level caching
//! - [`environment`] - Classes, constants and variables checked against
//! - [`error`] - Error types and result aliases
//! - [`packages`] - Installed package index, patterns and version constraints
//! - [`reflection`] - Marker sources and YAML manifests
//! - [`requirements`] - Markers, outcome behaviors, validators and messages
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use requisite::config::BehaviorSettings;
//! use requisite::engine::{Outcome, PreconditionRunner};
//! use requisite::environment::SystemEnvironment;
//! use requisite::packages::InstalledPackages;
//! use requisite::reflection::{MarkerRegistry, TestClass, TestMethod};
//! use requisite::requirements::Marker;
//!
//! let registry = MarkerRegistry::from_classes(vec![TestClass::new("ClientTest")
//!     .with_method(TestMethod::new("testSend").with_marker(Marker::requires_package("vendor/missing-pkg")))]);
//!
//! let mut runner = PreconditionRunner::new(
//!     Box::new(registry),
//!     Box::new(SystemEnvironment::new()),
//!     Box::new(InstalledPackages::new()),
//! )
//! .with_builtin_tracers(&BehaviorSettings::new());
//!
//! let outcome = runner.prepare_test("ClientTest", "testSend").unwrap();
//! assert_eq!(outcome, Outcome::Skip("Package \"vendor/missing-pkg\" is required.".to_string()));
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod environment;
pub mod error;
pub mod packages;
pub mod reflection;
pub mod requirements;
pub mod ui;

pub use error::{RequisiteError, Result};
