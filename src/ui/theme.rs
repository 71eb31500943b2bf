//! Visual theme and styling.

use console::Style;

/// Requisite's visual theme.
#[derive(Debug, Clone)]
pub struct RequisiteTheme {
    /// Style for passing tests and success messages (green).
    pub success: Style,
    /// Style for skipped tests and notices (orange).
    pub warning: Style,
    /// Style for failed tests and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for RequisiteTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RequisiteTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a test result line: status label, test name, then message.
    pub fn format_result(&self, status: &str, test: &str, message: Option<&str>) -> String {
        let label = match status {
            "pass" => self.success.apply_to("PASS"),
            "skip" => self.warning.apply_to("SKIP"),
            _ => self.error.apply_to("FAIL"),
        };
        match message {
            Some(message) => {
                let indented = message.replace('\n', "\n       ");
                format!("{} {}\n       {}", label, test, self.dim.apply_to(indented))
            }
            None => format!("{} {}", label, test),
        }
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
