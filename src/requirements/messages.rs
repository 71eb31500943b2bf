//! Default violation messages.
//!
//! Used only when a marker carries no custom message.

use super::marker::{Direction, MarkerKind, Subject};

fn verb(direction: Direction) -> &'static str {
    match direction {
        Direction::Requires => "required",
        Direction::Forbids => "forbidden",
    }
}

fn noun(subject: Subject) -> &'static str {
    match subject {
        Subject::Class => "Class",
        Subject::Constant => "Constant",
        Subject::Env => "Environment variable",
        Subject::Package => "Package",
    }
}

/// Canonical message for a marker kind, subject and optional constraint.
///
/// ```
/// use requisite::requirements::{messages, MarkerKind};
///
/// assert_eq!(
///     messages::for_kind(MarkerKind::RequiresPackage, "foo/baz", Some("> 10")),
///     "Package \"foo/baz\" (> 10) is required."
/// );
/// ```
pub fn for_kind(kind: MarkerKind, subject: &str, constraint: Option<&str>) -> String {
    let constraint = constraint
        .map(|c| format!(" ({})", c))
        .unwrap_or_default();
    format!(
        "{} \"{}\"{} is {}.",
        noun(kind.subject()),
        subject,
        constraint,
        verb(kind.direction())
    )
}
