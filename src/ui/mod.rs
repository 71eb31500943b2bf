//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] capturing output in tests
//! - [`RequisiteTheme`] colors and formatting

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::{CapturedResult, MockUI};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, RequisiteTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning, such as a deprecation notice.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display one test result. `status` is `pass`, `skip` or `fail`.
    fn result(&mut self, status: &str, test: &str, message: Option<&str>);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Whether output is colorized.
    fn colors_enabled(&self) -> bool;
}
