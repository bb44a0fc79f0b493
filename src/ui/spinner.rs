//! Animated spinner with a live tail of command output.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::shell::{OutputCallback, OutputLine};

use super::theme::EnvSyncTheme;
use super::SpinnerHandle;

/// Lines of `docker build` output kept under the spinner.
const LIVE_OUTPUT_LINES: usize = 6;

/// Width a tail line is cut to.
const TAIL_WIDTH: usize = 72;

/// [`SpinnerHandle`] drawn with indicatif.
pub struct ProgressSpinner {
    bar: ProgressBar,
    title: String,
}

impl ProgressSpinner {
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self {
            bar,
            title: message.to_string(),
        }
    }

    /// A spinner that draws nothing.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            title: String::new(),
        }
    }

    fn finish(&mut self, line: String) {
        if let Ok(style) = ProgressStyle::with_template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}

impl SpinnerHandle for ProgressSpinner {
    fn set_message(&mut self, msg: &str) {
        self.title = msg.to_string();
        self.bar.set_message(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(EnvSyncTheme::new().format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(EnvSyncTheme::new().format_error(msg));
    }

    fn output_callback(&self) -> Option<OutputCallback> {
        if self.bar.is_hidden() {
            return None;
        }
        Some(live_output_callback(
            self.bar.clone(),
            self.title.clone(),
            LIVE_OUTPUT_LINES,
        ))
    }
}

/// Most recent non-empty output lines, each cut to [`TAIL_WIDTH`].
struct OutputTail {
    lines: VecDeque<String>,
    capacity: usize,
}

impl OutputTail {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns false for blank lines, which are dropped.
    fn push(&mut self, raw: &str) -> bool {
        let text = raw.trim_end();
        if text.is_empty() {
            return false;
        }
        let shown = match text.char_indices().nth(TAIL_WIDTH - 3) {
            Some((cut, _)) if text.chars().count() > TAIL_WIDTH => format!("{}...", &text[..cut]),
            _ => text.to_string(),
        };
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(shown);
        true
    }

    fn render(&self, title: &str, theme: &EnvSyncTheme) -> String {
        self.lines.iter().fold(title.to_string(), |mut out, line| {
            out.push_str("\n  ");
            out.push_str(&theme.dim.apply_to(format!("» {}", line)).to_string());
            out
        })
    }
}

/// Callback that redraws `bar` as `title` plus the last `max_lines` lines
/// of output.
pub fn live_output_callback(bar: ProgressBar, title: String, max_lines: usize) -> OutputCallback {
    let tail = Arc::new(Mutex::new(OutputTail::new(max_lines.max(1))));
    let theme = EnvSyncTheme::new();

    Box::new(move |line: OutputLine| {
        let (OutputLine::Stdout(text) | OutputLine::Stderr(text)) = line;
        let Ok(mut tail) = tail.lock() else {
            return;
        };
        if tail.push(&text) {
            bar.set_message(tail.render(&title, &theme));
        }
    })
}
