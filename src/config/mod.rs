//! Configuration for requisite.
//!
//! This module handles all aspects of configuration:
//! - Flat extension parameters in [`parameters`]
//! - Migration of deprecated parameters in [`migration`]
//! - Per-kind default behaviors and deprecation notices in [`settings`]
//!
//! # Example
//!
//! ```
//! use requisite::config::{BehaviorSettings, Notices, Parameters};
//! use requisite::requirements::{MarkerKind, OutcomeBehavior};
//!
//! let params = Parameters::new().with("failOnMissingClasses", "true");
//! let mut notices = Notices::new();
//! let mut printed: Vec<String> = Vec::new();
//!
//! let settings = BehaviorSettings::resolve(&params, &mut notices, &mut printed);
//! assert_eq!(settings.behavior(MarkerKind::RequiresClass), OutcomeBehavior::Fail);
//! assert_eq!(printed.len(), 1);
//! ```

pub mod migration;
pub mod parameters;
pub mod settings;

pub use migration::{Migration, MigrationResult};
pub use parameters::{parse_boolean_value, ParameterSource, Parameters};
pub use settings::{migration_for, BehaviorSettings, NoticeSink, Notices};
