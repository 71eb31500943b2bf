//! Violation types produced when preconditions are not met.
//!
//! Violations are kept per marker, in declaration order. Two markers that
//! produce the same message both contribute their behavior to the merge;
//! only the rendered text collapses the duplicate line.

use std::collections::HashSet;

use super::behavior::OutcomeBehavior;

/// A single unmet precondition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human-readable message (custom or default).
    pub message: String,
    /// Effective behavior: the marker's override, else the configured default.
    pub behavior: OutcomeBehavior,
}

impl Violation {
    pub fn new(message: impl Into<String>, behavior: OutcomeBehavior) -> Self {
        Self {
            message: message.into(),
            behavior,
        }
    }
}

/// All violations found at one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Unique messages in first-seen order.
    pub fn messages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut messages = Vec::with_capacity(self.0.len());
        for violation in &self.0 {
            if seen.insert(violation.message.as_str()) {
                messages.push(violation.message.as_str());
            } else {
                tracing::debug!("Collapsing duplicate violation message: {}", violation.message);
            }
        }
        messages
    }

    /// Newline-joined messages.
    pub fn message(&self) -> String {
        self.messages().join("\n")
    }

    /// Most severe behavior among all violations.
    pub fn behavior(&self) -> Option<OutcomeBehavior> {
        OutcomeBehavior::merge(self.0.iter().map(|v| v.behavior))
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_violations_have_no_behavior() {
        let violations = Violations::new();
        assert!(violations.is_empty());
        assert_eq!(violations.behavior(), None);
        assert_eq!(violations.message(), "");
    }

    #[test]
    fn message_joins_in_declaration_order() {
        let violations: Violations = [
            Violation::new("first", OutcomeBehavior::Skip),
            Violation::new("second", OutcomeBehavior::Fail),
        ]
        .into_iter()
        .collect();
        assert_eq!(violations.message(), "first\nsecond");
        assert_eq!(violations.behavior(), Some(OutcomeBehavior::Fail));
    }

    #[test]
    fn duplicate_messages_collapse_but_keep_behaviors() {
        let violations: Violations = [
            Violation::new("same", OutcomeBehavior::Skip),
            Violation::new("other", OutcomeBehavior::Skip),
            Violation::new("same", OutcomeBehavior::Fail),
        ]
        .into_iter()
        .collect();
        assert_eq!(violations.len(), 3);
        assert_eq!(violations.messages(), vec!["same", "other"]);
        assert_eq!(violations.behavior(), Some(OutcomeBehavior::Fail));
    }
}
