//! Outcome behavior for unmet preconditions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens to a test whose precondition is not met.
///
/// `Fail` is strictly more severe than `Skip`; the derived ordering follows
/// [`OutcomeBehavior::severity`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeBehavior {
    /// Mark the test as skipped.
    #[default]
    #[serde(alias = "Skip", alias = "SKIP")]
    Skip,
    /// Mark the test as failed.
    #[serde(alias = "Fail", alias = "FAIL")]
    Fail,
}

impl OutcomeBehavior {
    pub fn severity(self) -> u8 {
        match self {
            OutcomeBehavior::Fail => 20,
            OutcomeBehavior::Skip => 10,
        }
    }

    /// Pick the most severe behavior of a set.
    ///
    /// Returns `None` for an empty set; the caller supplies the default.
    pub fn merge<I>(behaviors: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        behaviors.into_iter().max_by_key(|b| b.severity())
    }

    /// Parse a configured value, falling back to `Skip` when unrecognized.
    pub fn parse_or_skip(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Unrecognized outcome behavior '{}', falling back to skip",
                value
            );
            OutcomeBehavior::Skip
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutcomeBehavior::Fail => "fail",
            OutcomeBehavior::Skip => "skip",
        }
    }
}

impl FromStr for OutcomeBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(OutcomeBehavior::Fail),
            "skip" => Ok(OutcomeBehavior::Skip),
            other => Err(format!("Unknown outcome behavior: {}", other)),
        }
    }
}

impl std::fmt::Display for OutcomeBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_empty_is_none() {
        assert_eq!(OutcomeBehavior::merge(Vec::new()), None);
    }

    #[test]
    fn merge_single_skip() {
        assert_eq!(
            OutcomeBehavior::merge([OutcomeBehavior::Skip]),
            Some(OutcomeBehavior::Skip)
        );
    }

    #[test]
    fn merge_prefers_fail() {
        assert_eq!(
            OutcomeBehavior::merge([OutcomeBehavior::Skip, OutcomeBehavior::Fail]),
            Some(OutcomeBehavior::Fail)
        );
        assert_eq!(
            OutcomeBehavior::merge([
                OutcomeBehavior::Fail,
                OutcomeBehavior::Skip,
                OutcomeBehavior::Skip
            ]),
            Some(OutcomeBehavior::Fail)
        );
    }

    #[test]
    fn ordering_follows_severity() {
        assert!(OutcomeBehavior::Fail > OutcomeBehavior::Skip);
        assert!(OutcomeBehavior::Fail.severity() > OutcomeBehavior::Skip.severity());
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(" FAIL ".parse::<OutcomeBehavior>(), Ok(OutcomeBehavior::Fail));
        assert_eq!("Skip".parse::<OutcomeBehavior>(), Ok(OutcomeBehavior::Skip));
        assert!("explode".parse::<OutcomeBehavior>().is_err());
    }

    #[test]
    fn parse_or_skip_falls_back() {
        assert_eq!(OutcomeBehavior::parse_or_skip("true"), OutcomeBehavior::Skip);
        assert_eq!(OutcomeBehavior::parse_or_skip("fail"), OutcomeBehavior::Fail);
    }

    #[test]
    fn default_is_skip() {
        assert_eq!(OutcomeBehavior::default(), OutcomeBehavior::Skip);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(OutcomeBehavior::Fail.to_string(), "fail");
    }
}
