//! Requirement validators.
//!
//! Each validator evaluates one marker against the environment and returns
//! the violation message, if any. Validators are stateless; everything they
//! observe comes through the [`CheckContext`].

use crate::environment::Environment;
use crate::error::Result;
use crate::packages::PackageIndex;

use super::marker::{Marker, MarkerKind, Subject};
use super::messages;
use super::package::PackageValidator;

/// Collaborators a validator may query.
#[derive(Clone, Copy)]
pub struct CheckContext<'a> {
    pub environment: &'a dyn Environment,
    pub packages: &'a dyn PackageIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(environment: &'a dyn Environment, packages: &'a dyn PackageIndex) -> Self {
        Self {
            environment,
            packages,
        }
    }
}

/// Evaluates markers of one subject kind.
pub trait Validator {
    /// Validate a marker.
    ///
    /// Returns `Ok(None)` when satisfied and `Ok(Some(message))` when not.
    ///
    /// # Errors
    ///
    /// Only malformed marker data (e.g. an unparsable version constraint)
    /// is an error. Failed environment lookups count as "absent".
    fn validate(&self, marker: &Marker, ctx: &CheckContext<'_>) -> Result<Option<String>>;
}

/// The built-in validator for a marker kind.
pub fn validator_for(kind: MarkerKind) -> Box<dyn Validator> {
    match kind.subject() {
        Subject::Class => Box::new(ClassValidator),
        Subject::Constant => Box::new(ConstantValidator),
        Subject::Env => Box::new(EnvValidator),
        Subject::Package => Box::new(PackageValidator),
    }
}

/// Message for a violated marker: the custom one, else the default.
pub(crate) fn violation_message(marker: &Marker, constraint: Option<&str>) -> String {
    marker
        .message
        .clone()
        .unwrap_or_else(|| messages::for_kind(marker.kind, &marker.subject, constraint))
}

/// Shared presence check for class, constant and env markers.
fn check_presence(marker: &Marker, present: bool) -> Option<String> {
    tracing::trace!(
        "{} '{}': present={}",
        marker.kind,
        marker.subject,
        present
    );
    if marker.kind.direction().is_violated_by(present) {
        Some(violation_message(marker, None))
    } else {
        None
    }
}

/// Validates class existence.
pub struct ClassValidator;

impl Validator for ClassValidator {
    fn validate(&self, marker: &Marker, ctx: &CheckContext<'_>) -> Result<Option<String>> {
        let exists = ctx
            .environment
            .class_exists(&marker.subject)
            .unwrap_or_else(|e| {
                tracing::debug!("Class lookup for '{}' failed: {}", marker.subject, e);
                false
            });
        Ok(check_presence(marker, exists))
    }
}

/// Validates constant definitions.
pub struct ConstantValidator;

impl Validator for ConstantValidator {
    fn validate(&self, marker: &Marker, ctx: &CheckContext<'_>) -> Result<Option<String>> {
        let defined = ctx
            .environment
            .constant_defined(&marker.subject)
            .unwrap_or_else(|e| {
                tracing::debug!("Constant lookup for '{}' failed: {}", marker.subject, e);
                false
            });
        Ok(check_presence(marker, defined))
    }
}

/// Validates environment variable presence.
///
/// The live process environment is consulted first, then the loaded map.
pub struct EnvValidator;

impl Validator for EnvValidator {
    fn validate(&self, marker: &Marker, ctx: &CheckContext<'_>) -> Result<Option<String>> {
        let name = &marker.subject;
        let value = ctx
            .environment
            .var(name)
            .or_else(|| ctx.environment.loaded_var(name));
        Ok(check_presence(marker, value.is_some()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::RequisiteError;
    use crate::packages::InstalledPackages;
    use std::collections::{HashMap, HashSet};

    /// Environment with fixed contents.
    #[derive(Default)]
    pub(crate) struct MockEnvironment {
        pub classes: HashSet<String>,
        pub constants: HashSet<String>,
        pub vars: HashMap<String, String>,
        pub loaded: HashMap<String, String>,
        pub broken: HashSet<String>,
    }

    impl Environment for MockEnvironment {
        fn class_exists(&self, name: &str) -> Result<bool> {
            if self.broken.contains(name) {
                return Err(RequisiteError::InvalidSymbol {
                    name: name.to_string(),
                });
            }
            Ok(self.classes.contains(name))
        }

        fn constant_defined(&self, name: &str) -> Result<bool> {
            if self.broken.contains(name) {
                return Err(RequisiteError::InvalidSymbol {
                    name: name.to_string(),
                });
            }
            Ok(self.constants.contains(name))
        }

        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }

        fn loaded_var(&self, name: &str) -> Option<String> {
            self.loaded.get(name).cloned()
        }
    }

    fn validate(marker: &Marker, env: &MockEnvironment) -> Option<String> {
        let packages = InstalledPackages::new();
        let ctx = CheckContext::new(env, &packages);
        validator_for(marker.kind).validate(marker, &ctx).unwrap()
    }

    #[test]
    fn requires_class_missing() {
        let env = MockEnvironment::default();
        assert_eq!(
            validate(&Marker::requires_class("Foo\\Bar"), &env),
            Some("Class \"Foo\\Bar\" is required.".to_string())
        );
    }

    #[test]
    fn requires_class_present() {
        let mut env = MockEnvironment::default();
        env.classes.insert("Foo".to_string());
        assert_eq!(validate(&Marker::requires_class("Foo"), &env), None);
        assert_eq!(
            validate(&Marker::forbids_class("Foo"), &env),
            Some("Class \"Foo\" is forbidden.".to_string())
        );
    }

    #[test]
    fn failed_class_lookup_counts_as_missing() {
        let mut env = MockEnvironment::default();
        env.broken.insert("Broken".to_string());
        assert!(validate(&Marker::requires_class("Broken"), &env).is_some());
        assert_eq!(validate(&Marker::forbids_class("Broken"), &env), None);
    }

    #[test]
    fn constant_symmetry() {
        let mut env = MockEnvironment::default();
        env.constants.insert("FOO_BAZ".to_string());

        assert_eq!(validate(&Marker::requires_constant("FOO_BAZ"), &env), None);
        assert_eq!(
            validate(&Marker::forbids_constant("FOO_BAZ"), &env),
            Some("Constant \"FOO_BAZ\" is forbidden.".to_string())
        );
        assert_eq!(
            validate(&Marker::requires_constant("OTHER"), &env),
            Some("Constant \"OTHER\" is required.".to_string())
        );
        assert_eq!(validate(&Marker::forbids_constant("OTHER"), &env), None);
    }

    #[test]
    fn failed_constant_lookup_counts_as_undefined() {
        let mut env = MockEnvironment::default();
        env.broken.insert("BAD".to_string());
        assert!(validate(&Marker::requires_constant("BAD"), &env).is_some());
    }

    #[test]
    fn env_custom_message_wins() {
        let env = MockEnvironment::default();
        let marker = Marker::requires_env("FOO_BAZ").with_message("FOO_BAZ is missing, sorry!");
        assert_eq!(
            validate(&marker, &env),
            Some("FOO_BAZ is missing, sorry!".to_string())
        );
    }

    #[test]
    fn env_falls_back_to_loaded_map() {
        let mut env = MockEnvironment::default();
        env.loaded.insert("FROM_FILE".to_string(), "1".to_string());
        assert_eq!(validate(&Marker::requires_env("FROM_FILE"), &env), None);
        assert_eq!(
            validate(&Marker::forbids_env("FROM_FILE"), &env),
            Some("Environment variable \"FROM_FILE\" is forbidden.".to_string())
        );
    }

    #[test]
    fn empty_env_value_counts_as_set() {
        let mut env = MockEnvironment::default();
        env.vars.insert("EMPTY".to_string(), String::new());
        assert_eq!(validate(&Marker::requires_env("EMPTY"), &env), None);
        assert!(validate(&Marker::forbids_env("EMPTY"), &env).is_some());
    }

    #[test]
    fn env_unset_everywhere() {
        let env = MockEnvironment::default();
        assert_eq!(validate(&Marker::forbids_env("NOPE"), &env), None);
        assert_eq!(
            validate(&Marker::requires_env("NOPE"), &env),
            Some("Environment variable \"NOPE\" is required.".to_string())
        );
    }
}
