//! Package name patterns.

use crate::error::{RequisiteError, Result};
use regex::Regex;

/// A package name or a `*` glob over package names.
///
/// `*` matches any run of characters, including `/`. Everything else matches
/// literally and the whole name must match.
#[derive(Debug, Clone)]
pub enum PackagePattern {
    Literal(String),
    Glob { raw: String, regex: Regex },
}

impl PackagePattern {
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.contains('*') {
            return Ok(PackagePattern::Literal(raw.to_string()));
        }

        let body = raw
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("^{}$", body)).map_err(|e| {
            RequisiteError::InvalidPackagePattern {
                pattern: raw.to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(PackagePattern::Glob {
            raw: raw.to_string(),
            regex,
        })
    }

    pub fn is_glob(&self) -> bool {
        matches!(self, PackagePattern::Glob { .. })
    }

    pub fn as_str(&self) -> &str {
        match self {
            PackagePattern::Literal(name) => name,
            PackagePattern::Glob { raw, .. } => raw,
        }
    }

    pub fn matches(&self, package: &str) -> bool {
        match self {
            PackagePattern::Literal(name) => name == package,
            PackagePattern::Glob { regex, .. } => regex.is_match(package),
        }
    }
}
