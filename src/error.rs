//! Error types for requisite operations.
//!
//! This module defines [`RequisiteError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Unmet preconditions are never errors; they become an
//!   [`Outcome`](crate::engine::Outcome)
//! - Lookup failures against the environment surface as `InvalidSymbol` and
//!   are swallowed by validators
//! - Reflection errors and malformed version constraints propagate to the host
//! - Use `anyhow::Error` (via `RequisiteError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for requisite operations.
#[derive(Debug, Error)]
pub enum RequisiteError {
    /// The marker source knows nothing about the requested test class.
    #[error("Unknown test class: {class}")]
    UnknownTestClass { class: String },

    /// The test class exists but has no such method.
    #[error("Unknown test method: {class}::{method}")]
    UnknownTestMethod { class: String, method: String },

    /// A version constraint could not be parsed.
    #[error("Invalid version constraint \"{constraint}\": {message}")]
    InvalidVersionConstraint { constraint: String, message: String },

    /// A package name pattern could not be compiled.
    #[error("Invalid package pattern \"{pattern}\": {message}")]
    InvalidPackagePattern { pattern: String, message: String },

    /// A class or constant name is not a valid symbol.
    #[error("Invalid symbol name: \"{name}\"")]
    InvalidSymbol { name: String },

    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Failed to parse a lockfile used as package index.
    #[error("Failed to parse lockfile at {path}: {message}")]
    LockfileParseError { path: PathBuf, message: String },

    /// Failed to parse a dotenv-style file.
    #[error("Failed to parse env file at {path}: {message}")]
    EnvFileParseError { path: PathBuf, message: String },

    /// A parameter override was not in `name=value` form.
    #[error("Invalid parameter '{raw}': expected NAME=VALUE")]
    InvalidParameter { raw: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for requisite operations.
pub type Result<T> = std::result::Result<T, RequisiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_test_class_displays_class() {
        let err = RequisiteError::UnknownTestClass {
            class: "Acme\\FooTest".into(),
        };
        assert!(err.to_string().contains("Acme\\FooTest"));
    }

    #[test]
    fn unknown_test_method_displays_class_and_method() {
        let err = RequisiteError::UnknownTestMethod {
            class: "FooTest".into(),
            method: "testBar".into(),
        };
        assert_eq!(err.to_string(), "Unknown test method: FooTest::testBar");
    }

    #[test]
    fn invalid_version_constraint_displays_constraint_and_message() {
        let err = RequisiteError::InvalidVersionConstraint {
            constraint: ">>1".into(),
            message: "unexpected character".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(">>1"));
        assert!(msg.contains("unexpected character"));
    }

    #[test]
    fn manifest_parse_error_displays_path_and_message() {
        let err = RequisiteError::ManifestParseError {
            path: PathBuf::from("/requisite.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/requisite.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_parameter_displays_raw_value() {
        let err = RequisiteError::InvalidParameter {
            raw: "failOnMissingClasses".into(),
        };
        assert!(err.to_string().contains("failOnMissingClasses"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: RequisiteError = io_err.into();
        assert!(matches!(err, RequisiteError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(RequisiteError::InvalidSymbol { name: "".into() })
        }
        assert!(returns_error().is_err());
    }
}
