//! Colors and line prefixes.

use console::Style;

/// Styles for each kind of line EnvSync prints.
#[derive(Debug, Clone)]
pub struct EnvSyncTheme {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Streamed command output under a spinner.
    pub dim: Style,
    pub header: Style,
    /// Keys of the environment summary.
    pub key: Style,
}

impl Default for EnvSyncTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSyncTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().cyan().bold(),
            key: Style::new().bold(),
        }
    }

    /// Same layout, no escape codes.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    fn marked(style: &Style, mark: char, msg: &str) -> String {
        style.apply_to(format!("[{}] {}", mark, msg)).to_string()
    }

    pub fn format_success(&self, msg: &str) -> String {
        Self::marked(&self.success, '✓', msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        Self::marked(&self.warning, '!', msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        Self::marked(&self.error, '✗', msg)
    }

    /// `  Key:       value`, keys padded to line up.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        let label = format!("{}:", key);
        format!("  {} {}", self.key.apply_to(format!("{:<10}", label)), value)
    }

    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }
}

/// Colors are off under `NO_COLOR` and when stdout is not a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_markers() {
        let theme = EnvSyncTheme::plain();

        assert_eq!(
            theme.format_success("JSON report saved to r.json"),
            "[✓] JSON report saved to r.json"
        );
        assert_eq!(theme.format_warning("2 conflict(s)"), "[!] 2 conflict(s)");
        assert_eq!(theme.format_error("Failed"), "[✗] Failed");
    }

    #[test]
    fn key_values_line_up() {
        let theme = EnvSyncTheme::plain();

        assert_eq!(theme.format_key_value("Node", "v20.11.1"), "  Node:      v20.11.1");
        assert_eq!(theme.format_key_value("Java", "17"), "  Java:      17");
    }

    #[test]
    fn header_is_the_title() {
        assert_eq!(EnvSyncTheme::plain().format_header("EnvSync"), "EnvSync");
    }
}
