//! Version constraints for package markers.

use crate::error::{RequisiteError, Result};
use semver::{Version, VersionReq};

/// A parsed version constraint.
///
/// Alternatives are separated by `||` (or a single `|`); each alternative is a
/// semver requirement such as `>=2.0, <3` or `^1.4`. The raw text is kept for
/// messages.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionConstraint {
    raw: String,
    alternatives: Vec<VersionReq>,
}

impl VersionConstraint {
    /// Parse a constraint expression.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVersionConstraint` for empty or unparsable input.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let invalid = |message: String| RequisiteError::InvalidVersionConstraint {
            constraint: raw.to_string(),
            message,
        };

        if trimmed.is_empty() {
            return Err(invalid("constraint is empty".to_string()));
        }

        let alternatives = trimmed
            .split('|')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| VersionReq::parse(part).map_err(|e| invalid(e.to_string())))
            .collect::<Result<Vec<_>>>()?;

        if alternatives.is_empty() {
            return Err(invalid("no alternatives given".to_string()));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            alternatives,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether an installed version string satisfies this constraint.
    ///
    /// Versions that can't be coerced to semver never satisfy.
    pub fn matches(&self, version: &str) -> bool {
        let Some(version) = coerce_version(version) else {
            tracing::debug!("Cannot interpret version '{}'", version);
            return false;
        };
        self.alternatives.iter().any(|req| req.matches(&version))
    }
}

impl std::fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Coerce loose version strings (`v2`, `1.4`, `3.0.1`) into semver.
fn coerce_version(raw: &str) -> Option<Version> {
    let s = raw.trim();
    let s = s
        .strip_prefix('v')
        .or_else(|| s.strip_prefix('V'))
        .unwrap_or(s);
    if s.is_empty() {
        return None;
    }

    // Pad the numeric core only; keep pre-release and build suffixes intact.
    let split_at = s.find(['-', '+']).unwrap_or(s.len());
    let (core, suffix) = s.split_at(split_at);
    let coerced = match core.split('.').count() {
        1 => format!("{}.0.0{}", core, suffix),
        2 => format!("{}.0{}", core, suffix),
        _ => s.to_string(),
    };

    Version::parse(&coerced).ok()
}
