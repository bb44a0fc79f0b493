//! Plain output for CI logs and pipes.

use crate::shell::{OutputCallback, OutputLine};

use super::{EnvSyncTheme, OutputMode, SpinnerHandle, UserInterface};

/// Line-oriented UI: no colors and no animation.
///
/// A spinner prints its message once when started and its final line when
/// finished, so CI logs read top to bottom.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: EnvSyncTheme,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: EnvSyncTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_progress() {
            println!("{}", self.theme.format_key_value(key, value));
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let progress = self.mode.shows_progress();
        if progress {
            println!("{}", message);
        }
        Box::new(LogSpinner {
            theme: self.theme.clone(),
            progress,
            streams: self.mode.streams_commands(),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("== {} ==", title);
        }
    }
}

struct LogSpinner {
    theme: EnvSyncTheme,
    progress: bool,
    streams: bool,
}

impl SpinnerHandle for LogSpinner {
    fn set_message(&mut self, msg: &str) {
        if self.progress {
            println!("{}", msg);
        }
    }

    fn finish_success(&mut self, msg: &str) {
        if self.progress {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn output_callback(&self) -> Option<OutputCallback> {
        if !self.streams {
            return None;
        }
        Some(Box::new(|line: OutputLine| match line {
            OutputLine::Stdout(text) => println!("  | {}", text),
            OutputLine::Stderr(text) => eprintln!("  | {}", text),
        }))
    }
}
