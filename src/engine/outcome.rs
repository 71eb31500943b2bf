//! Final decision for one test.

use crate::requirements::{OutcomeBehavior, Violations};

/// What the host should do with the test about to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All preconditions hold; run the test.
    Continue,
    /// Mark the test skipped with this message.
    Skip(String),
    /// Mark the test failed with this message.
    Fail(String),
}

impl Outcome {
    /// Terminate with `behavior`.
    pub fn terminate(behavior: OutcomeBehavior, message: impl Into<String>) -> Self {
        match behavior {
            OutcomeBehavior::Skip => Outcome::Skip(message.into()),
            OutcomeBehavior::Fail => Outcome::Fail(message.into()),
        }
    }

    /// Decide from a set of violations.
    ///
    /// No violations means `Continue`. Otherwise the most severe behavior
    /// wins, falling back to `default`, and all messages are newline-joined.
    pub fn decide(violations: &Violations, default: OutcomeBehavior) -> Self {
        if violations.is_empty() {
            return Outcome::Continue;
        }
        let behavior = violations.behavior().unwrap_or(default);
        Self::terminate(behavior, violations.message())
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Outcome::Continue)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    /// The skip or failure message.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Continue => None,
            Outcome::Skip(message) | Outcome::Fail(message) => Some(message.as_str()),
        }
    }

    /// The behavior that terminated the test, if any.
    pub fn behavior(&self) -> Option<OutcomeBehavior> {
        match self {
            Outcome::Continue => None,
            Outcome::Skip(_) => Some(OutcomeBehavior::Skip),
            Outcome::Fail(_) => Some(OutcomeBehavior::Fail),
        }
    }

    /// Short lowercase status: `pass`, `skip` or `fail`.
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Continue => "pass",
            Outcome::Skip(_) => "skip",
            Outcome::Fail(_) => "fail",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::Violation;

    #[test]
    fn no_violations_continue() {
        let outcome = Outcome::decide(&Violations::new(), OutcomeBehavior::Fail);
        assert!(outcome.is_continue());
        assert_eq!(outcome.message(), None);
        assert_eq!(outcome.status(), "pass");
    }

    #[test]
    fn fail_beats_skip() {
        let violations: Violations = [
            Violation::new("a", OutcomeBehavior::Skip),
            Violation::new("b", OutcomeBehavior::Fail),
        ]
        .into_iter()
        .collect();
        let outcome = Outcome::decide(&violations, OutcomeBehavior::Skip);
        assert_eq!(outcome, Outcome::Fail("a\nb".to_string()));
        assert_eq!(outcome.behavior(), Some(OutcomeBehavior::Fail));
    }

    #[test]
    fn only_skips_skip() {
        let violations: Violations = [Violation::new("a", OutcomeBehavior::Skip)]
            .into_iter()
            .collect();
        let outcome = Outcome::decide(&violations, OutcomeBehavior::Fail);
        assert!(outcome.is_skip());
        assert_eq!(outcome.message(), Some("a"));
    }

    #[test]
    fn terminate_maps_behavior() {
        assert!(Outcome::terminate(OutcomeBehavior::Fail, "x").is_fail());
        assert!(Outcome::terminate(OutcomeBehavior::Skip, "x").is_skip());
    }
}
