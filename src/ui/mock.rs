//! Recording UI for tests.
//!
//! Everything a command shows is appended to one ordered event log, spinner
//! results included, so tests can assert on content and on order.
//!
//! # Example
//!
//! ```
//! use envsync::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! let mut spinner = ui.start_spinner("Scanning environment...");
//! spinner.finish_success("Environment scanned");
//! ui.success("JSON report saved to envsync_report.json");
//!
//! assert!(ui.has_success("envsync_report.json"));
//! assert_eq!(
//!     ui.events()[1],
//!     UiEvent::SpinnerDone { ok: true, text: "Environment scanned".into() }
//! );
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// One thing shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    KeyValue(String, String),
    SpinnerStart(String),
    SpinnerDone { ok: bool, text: String },
}

type EventLog = Rc<RefCell<Vec<UiEvent>>>;

/// [`UserInterface`] that records instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    log: EventLog,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Every event so far, oldest first.
    pub fn events(&self) -> Vec<UiEvent> {
        self.log.borrow().clone()
    }

    fn texts(&self, pick: fn(&UiEvent) -> Option<&String>) -> Vec<String> {
        self.log.borrow().iter().filter_map(pick).cloned().collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Message(m) => Some(m),
            _ => None,
        })
    }

    pub fn successes(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Success(m) => Some(m),
            _ => None,
        })
    }

    pub fn warnings(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Warning(m) => Some(m),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Error(m) => Some(m),
            _ => None,
        })
    }

    pub fn headers(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::Header(m) => Some(m),
            _ => None,
        })
    }

    /// Messages that spinners were started with.
    pub fn spinners(&self) -> Vec<String> {
        self.texts(|e| match e {
            UiEvent::SpinnerStart(m) => Some(m),
            _ => None,
        })
    }

    /// Value of the last `key` line shown.
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|e| match e {
            UiEvent::KeyValue(k, v) if k == key => Some(v.clone()),
            _ => None,
        })
    }

    pub fn has_message(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes().iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors().iter().any(|m| m.contains(needle))
    }

    /// Whether a spinner finished with a line containing `needle`.
    pub fn has_spinner_result(&self, ok: bool, needle: &str) -> bool {
        self.log.borrow().iter().any(|e| match e {
            UiEvent::SpinnerDone { ok: done, text } => *done == ok && text.contains(needle),
            _ => false,
        })
    }

    fn record(&self, event: UiEvent) {
        self.log.borrow_mut().push(event);
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.record(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.record(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.record(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.record(UiEvent::Error(msg.to_string()));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.record(UiEvent::KeyValue(key.to_string(), value.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.record(UiEvent::SpinnerStart(message.to_string()));
        Box::new(MockSpinner {
            log: Rc::clone(&self.log),
        })
    }

    fn show_header(&mut self, title: &str) {
        self.record(UiEvent::Header(title.to_string()));
    }
}

/// Spinner that writes its result into the owning [`MockUI`]'s log.
struct MockSpinner {
    log: EventLog,
}

impl MockSpinner {
    fn done(&self, ok: bool, text: &str) {
        self.log.borrow_mut().push(UiEvent::SpinnerDone {
            ok,
            text: text.to_string(),
        });
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.done(true, msg);
    }

    fn finish_error(&mut self, msg: &str) {
        self.done(false, msg);
    }
}
