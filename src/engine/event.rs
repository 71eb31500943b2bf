//! Test lifecycle notifications from the host runner.

use std::fmt;

/// A lifecycle point at which preconditions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestEvent<'a> {
    /// A method of `class` is about to run. Class-level markers are checked.
    BeforeTestMethodCalled { class: &'a str },
    /// `class::method` is prepared. Method-level markers are checked.
    Prepared { class: &'a str, method: &'a str },
}

impl<'a> TestEvent<'a> {
    pub fn class(&self) -> &'a str {
        match *self {
            TestEvent::BeforeTestMethodCalled { class } | TestEvent::Prepared { class, .. } => {
                class
            }
        }
    }
}

impl fmt::Display for TestEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestEvent::BeforeTestMethodCalled { class } => {
                write!(f, "before-test-method-called({})", class)
            }
            TestEvent::Prepared { class, method } => write!(f, "prepared({}::{})", class, method),
        }
    }
}
