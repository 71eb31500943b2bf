//! Package requirement validation.

use crate::error::Result;
use crate::packages::{PackagePattern, VersionConstraint};

use super::marker::{Direction, Marker};
use super::validator::{violation_message, CheckContext, Validator};

/// Validates package installation and version constraints.
///
/// The subject may be a package name or a `*` pattern. With a constraint,
/// matched packages are checked in index order and the first offending one
/// is reported.
pub struct PackageValidator;

impl PackageValidator {
    fn resolve_matches(pattern: &PackagePattern, ctx: &CheckContext<'_>) -> Vec<String> {
        if pattern.is_glob() {
            return ctx
                .packages
                .installed_packages()
                .into_iter()
                .filter(|package| pattern.matches(package))
                .collect();
        }

        match ctx.packages.installed_version(pattern.as_str()) {
            Some(_) => vec![pattern.as_str().to_string()],
            None => Vec::new(),
        }
    }
}

impl Validator for PackageValidator {
    fn validate(&self, marker: &Marker, ctx: &CheckContext<'_>) -> Result<Option<String>> {
        let pattern = PackagePattern::parse(&marker.subject)?;
        let constraint = marker
            .version
            .as_deref()
            .map(VersionConstraint::parse)
            .transpose()?;
        let direction = marker.kind.direction();

        let matches = Self::resolve_matches(&pattern, ctx);
        tracing::trace!(
            "{} '{}' matched {} package(s)",
            marker.kind,
            marker.subject,
            matches.len()
        );

        if matches.is_empty() {
            return Ok(match direction {
                Direction::Requires => Some(violation_message(marker, None)),
                Direction::Forbids => None,
            });
        }

        let Some(constraint) = constraint else {
            return Ok(match direction {
                Direction::Requires => None,
                Direction::Forbids => Some(violation_message(marker, None)),
            });
        };

        for package in &matches {
            let satisfied = ctx
                .packages
                .installed_version(package)
                .is_some_and(|version| ctx.packages.satisfies(&version, &constraint));

            if direction.is_violated_by(satisfied) {
                let message = marker.message.clone().unwrap_or_else(|| {
                    super::messages::for_kind(marker.kind, package, Some(constraint.as_str()))
                });
                return Ok(Some(message));
            }
        }

        Ok(None)
    }
}
