//! Package index, name patterns and version constraints.
//!
//! # Modules
//!
//! - [`constraint`] - Semver-based version constraints
//! - [`index`] - The [`PackageIndex`] trait and a lockfile-backed index
//! - [`pattern`] - `*` glob matching over package names

pub mod constraint;
pub mod index;
pub mod pattern;

pub use constraint::VersionConstraint;
pub use index::{InstalledPackage, InstalledPackages, PackageIndex};
pub use pattern::PackagePattern;
