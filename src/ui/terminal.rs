//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, RequisiteTheme, UserInterface};

/// UI writing results to stdout and notices to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: RequisiteTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            RequisiteTheme::new()
        } else {
            RequisiteTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn result(&mut self, status: &str, test: &str, message: Option<&str>) {
        writeln!(self.out, "{}", self.theme.format_result(status, test, message)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.out, "{}", self.theme.format_header(title)).ok();
    }

    fn colors_enabled(&self) -> bool {
        should_use_colors()
    }
}
