//! Colored output for an attached terminal.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, EnvSyncTheme, NonInteractiveUI, OutputMode, ProgressSpinner,
    SpinnerHandle, UserInterface,
};

/// UI for a real terminal: styled lines and animated spinners.
pub struct TerminalUI {
    out: Term,
    theme: EnvSyncTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvSyncTheme::new()
        } else {
            EnvSyncTheme::plain()
        };
        Self {
            out: Term::stdout(),
            theme,
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        // Write errors on stdout are ignored.
        let _ = writeln!(self.out, "{}", text);
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = self.theme.format_warning(msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let _ = writeln!(Term::stderr(), "{}", self.theme.format_error(msg));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_progress() {
            let text = self.theme.format_key_value(key, value);
            self.line(&text);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if !self.mode.shows_progress() {
            return Box::new(ProgressSpinner::hidden());
        }
        Box::new(ProgressSpinner::new(message))
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            let text = self.theme.format_header(title);
            self.line("");
            self.line(&text);
            self.line("");
        }
    }
}

/// Pick the UI for this process.
///
/// The animated UI needs both an interactive session and a stdout that is a
/// terminal; anything else gets plain log lines.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
