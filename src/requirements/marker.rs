//! Requirement markers.
//!
//! A [`Marker`] is the declarative precondition attached to a test class or
//! test method. Markers are immutable once declared and may be repeated any
//! number of times at either scope.

use serde::{Deserialize, Serialize};

use super::behavior::OutcomeBehavior;

/// Whether a marker demands presence or absence of its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The subject must be present.
    Requires,
    /// The subject must be absent.
    Forbids,
}

impl Direction {
    /// Whether the observed state of a subject violates this direction.
    ///
    /// `Requires` violates exactly when the subject is absent, `Forbids`
    /// exactly when it is present.
    pub fn is_violated_by(self, present: bool) -> bool {
        match self {
            Direction::Requires => !present,
            Direction::Forbids => present,
        }
    }
}

/// The kind of requirement a marker expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    RequiresClass,
    ForbidsClass,
    RequiresConstant,
    ForbidsConstant,
    RequiresEnv,
    ForbidsEnv,
    RequiresPackage,
    ForbidsPackage,
}

/// What a marker's subject refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Class,
    Constant,
    Env,
    Package,
}

impl MarkerKind {
    /// All kinds, in the order their tracers are registered.
    pub const ALL: [MarkerKind; 8] = [
        MarkerKind::RequiresClass,
        MarkerKind::ForbidsClass,
        MarkerKind::RequiresConstant,
        MarkerKind::ForbidsConstant,
        MarkerKind::RequiresEnv,
        MarkerKind::ForbidsEnv,
        MarkerKind::RequiresPackage,
        MarkerKind::ForbidsPackage,
    ];

    pub fn direction(self) -> Direction {
        match self {
            MarkerKind::RequiresClass
            | MarkerKind::RequiresConstant
            | MarkerKind::RequiresEnv
            | MarkerKind::RequiresPackage => Direction::Requires,
            MarkerKind::ForbidsClass
            | MarkerKind::ForbidsConstant
            | MarkerKind::ForbidsEnv
            | MarkerKind::ForbidsPackage => Direction::Forbids,
        }
    }

    pub fn subject(self) -> Subject {
        match self {
            MarkerKind::RequiresClass | MarkerKind::ForbidsClass => Subject::Class,
            MarkerKind::RequiresConstant | MarkerKind::ForbidsConstant => Subject::Constant,
            MarkerKind::RequiresEnv | MarkerKind::ForbidsEnv => Subject::Env,
            MarkerKind::RequiresPackage | MarkerKind::ForbidsPackage => Subject::Package,
        }
    }

    /// Configuration parameter holding the default behavior for this kind.
    pub fn parameter_name(self) -> &'static str {
        match self {
            MarkerKind::RequiresClass => "behaviorOnMissingClasses",
            MarkerKind::ForbidsClass => "behaviorOnAvailableClasses",
            MarkerKind::RequiresConstant => "behaviorOnUndefinedConstants",
            MarkerKind::ForbidsConstant => "behaviorOnDefinedConstants",
            MarkerKind::RequiresEnv => "behaviorOnMissingEnvironmentVariables",
            MarkerKind::ForbidsEnv => "behaviorOnAvailableEnvironmentVariables",
            MarkerKind::RequiresPackage => "behaviorOnUnsatisfiedPackageRequirements",
            MarkerKind::ForbidsPackage => "behaviorOnForbiddenPackages",
        }
    }

    /// Deprecated boolean parameter superseded by [`Self::parameter_name`].
    pub fn legacy_parameter_name(self) -> Option<&'static str> {
        match self {
            MarkerKind::RequiresClass => Some("failOnMissingClasses"),
            MarkerKind::RequiresConstant => Some("failOnUndefinedConstants"),
            MarkerKind::RequiresEnv => Some("failOnMissingEnvironmentVariables"),
            MarkerKind::RequiresPackage => Some("failOnUnsatisfiedPackageRequirements"),
            _ => None,
        }
    }
}

impl std::fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MarkerKind::RequiresClass => "requires_class",
            MarkerKind::ForbidsClass => "forbids_class",
            MarkerKind::RequiresConstant => "requires_constant",
            MarkerKind::ForbidsConstant => "forbids_constant",
            MarkerKind::RequiresEnv => "requires_env",
            MarkerKind::ForbidsEnv => "forbids_env",
            MarkerKind::RequiresPackage => "requires_package",
            MarkerKind::ForbidsPackage => "forbids_package",
        };
        write!(f, "{}", name)
    }
}

/// A declared precondition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// The requirement kind.
    pub kind: MarkerKind,

    /// Class name, constant name, env variable name, or package name/pattern.
    pub subject: String,

    /// Version constraint (packages only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Custom message replacing the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Per-marker outcome behavior, overriding the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub behavior: Option<OutcomeBehavior>,
}

impl Marker {
    /// Create a marker with no constraint, message or behavior override.
    pub fn new(kind: MarkerKind, subject: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            version: None,
            message: None,
            behavior: None,
        }
    }

    pub fn requires_class(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::RequiresClass, name)
    }

    pub fn forbids_class(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::ForbidsClass, name)
    }

    pub fn requires_constant(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::RequiresConstant, name)
    }

    pub fn forbids_constant(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::ForbidsConstant, name)
    }

    pub fn requires_env(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::RequiresEnv, name)
    }

    pub fn forbids_env(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::ForbidsEnv, name)
    }

    pub fn requires_package(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::RequiresPackage, name)
    }

    pub fn forbids_package(name: impl Into<String>) -> Self {
        Self::new(MarkerKind::ForbidsPackage, name)
    }

    /// Attach a version constraint.
    pub fn with_version(mut self, constraint: impl Into<String>) -> Self {
        self.version = Some(constraint.into());
        self
    }

    /// Attach a custom message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a behavior override.
    pub fn with_behavior(mut self, behavior: OutcomeBehavior) -> Self {
        self.behavior = Some(behavior);
        self
    }
}
