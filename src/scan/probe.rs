//! Running the commands that inspect the machine.
//!
//! Scanning depends on [`Probe`] rather than on the shell directly, so the
//! scanner can be exercised without Python, Node.js or a JDK installed.
//!
//! # Example
//!
//! ```
//! use envsync::scan::{CannedProbe, Probe};
//!
//! let probe = CannedProbe::new().with("node -v", "v20.11.1");
//! assert_eq!(probe.run("node -v"), "v20.11.1");
//! assert!(probe.run("javac -version").starts_with("Error:"));
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use crate::shell::probe_output;

/// Runs a command and returns its probe text (see
/// [`CommandResult::probe_text`](crate::shell::CommandResult::probe_text)).
pub trait Probe {
    fn run(&self, command: &str) -> String;
}

/// Probe backed by the platform shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellProbe;

impl Probe for ShellProbe {
    fn run(&self, command: &str) -> String {
        let output = probe_output(command);
        tracing::debug!("probe `{}` -> {:?}", command, truncate(&output, 120));
        output
    }
}

/// Probe with fixed answers, for tests and dry runs.
///
/// Unknown commands answer like a missing tool would.
#[derive(Debug, Default)]
pub struct CannedProbe {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl CannedProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the output for a command.
    pub fn with(mut self, command: &str, output: &str) -> Self {
        self.responses
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Commands run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Probe for CannedProbe {
    fn run(&self, command: &str) -> String {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(command.to_string());
        }
        self.responses
            .get(command)
            .cloned()
            .unwrap_or_else(|| format!("Error: {}: command not found", command))
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
