//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use requisite::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking");
//! ui.warning("Deprecated parameter");
//!
//! assert!(ui.messages().contains(&"Checking".to_string()));
//! assert!(ui.has_warning("Deprecated"));
//! ```

use super::UserInterface;

/// One captured test result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedResult {
    pub status: String,
    pub test: String,
    pub message: Option<String>,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    results: Vec<CapturedResult>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured test results.
    pub fn results(&self) -> &[CapturedResult] {
        &self.results
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings.iter().any(|w| w.contains(text))
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn result(&mut self, status: &str, test: &str, message: Option<&str>) {
        self.results.push(CapturedResult {
            status: status.to_string(),
            test: test.to_string(),
            message: message.map(str::to_string),
        });
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn colors_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_everything() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.result("skip", "T::a", Some("why"));

        assert_eq!(ui.messages(), ["m".to_string()]);
        assert_eq!(ui.successes(), ["s".to_string()]);
        assert_eq!(ui.warnings(), ["w".to_string()]);
        assert_eq!(ui.errors(), ["e".to_string()]);
        assert_eq!(ui.headers(), ["h".to_string()]);
        assert_eq!(ui.results()[0].message.as_deref(), Some("why"));
    }
}
