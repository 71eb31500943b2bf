//! Requirement markers and their validation.
//!
//! This module provides the declarative precondition model and the
//! validators that decide whether a precondition holds in the current
//! environment.
//!
//! # Modules
//!
//! - [`behavior`] - Outcome behavior (skip or fail) and its merge order
//! - [`marker`] - Marker value objects and kinds
//! - [`messages`] - Default violation messages
//! - [`package`] - Package requirement validation
//! - [`validator`] - The [`Validator`] trait and class/constant/env validators
//! - [`violation`] - Violations collected for one scope

pub mod behavior;
pub mod marker;
pub mod messages;
pub mod package;
pub mod validator;
pub mod violation;

pub use behavior::OutcomeBehavior;
pub use marker::{Direction, Marker, MarkerKind, Subject};
pub use package::PackageValidator;
pub use validator::{
    validator_for, CheckContext, ClassValidator, ConstantValidator, EnvValidator, Validator,
};
pub use violation::{Violation, Violations};
