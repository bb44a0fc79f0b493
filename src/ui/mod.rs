//! Terminal output.
//!
//! Commands never print directly; they talk to a [`UserInterface`]. The
//! process picks [`TerminalUI`] or [`NonInteractiveUI`] through
//! [`create_ui`], and tests pass a [`MockUI`].
//!
//! ```
//! use envsync::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("EnvSync");
//! ui.success("JSON report saved to envsync_report.json");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, UiEvent};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use spinner::{live_output_callback, ProgressSpinner};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, EnvSyncTheme};

use crate::shell::OutputCallback;

/// Where command output goes.
///
/// Results (`message`, `success`, `warning`, `error`) are always shown.
/// Headers, summaries and spinners follow the [`OutputMode`].
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    fn message(&mut self, msg: &str);

    /// `[✓] msg`
    fn success(&mut self, msg: &str);

    /// `[!] msg`
    fn warning(&mut self, msg: &str);

    /// `[✗] msg`, on stderr.
    fn error(&mut self, msg: &str);

    /// One aligned line of the environment summary.
    fn key_value(&mut self, key: &str, value: &str);

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    fn show_header(&mut self, title: &str);
}

/// A running spinner.
pub trait SpinnerHandle {
    fn set_message(&mut self, msg: &str);

    fn finish_success(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);

    /// Sink for the output of a command running under this spinner.
    ///
    /// `None` means the output is not shown.
    fn output_callback(&self) -> Option<OutputCallback> {
        None
    }
}
