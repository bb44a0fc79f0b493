//! Shell command execution.

use crate::error::{EnvSyncError, Result};
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use super::platform::detect_shell;

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(
        status: std::process::ExitStatus,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code: status.code(),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }

    /// The text a probe reports: trimmed stdout, or trimmed stderr when
    /// stdout is empty. Tools like `java -version` write to stderr.
    pub fn probe_text(&self) -> String {
        let stdout = self.stdout.trim();
        if stdout.is_empty() {
            self.stderr.trim().to_string()
        } else {
            stdout.to_string()
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// Output line from command execution.
#[derive(Debug, Clone)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn Fn(OutputLine) + Send>;

fn build_command(command: &str, options: &CommandOptions) -> Command {
    let shell = detect_shell();

    let mut cmd = Command::new(&shell.executable);
    cmd.arg(shell.command_flag);
    cmd.arg(command);
    cmd.stdin(Stdio::null());

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd
}

/// Execute a shell command, capturing stdout and stderr.
///
/// A non-zero exit is not an error here; only failing to spawn the shell is.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let output = build_command(command, options)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|_| EnvSyncError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    Ok(CommandResult::from_status(
        output.status,
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        start.elapsed(),
    ))
}

/// Run a probe command and return what it printed.
///
/// Never fails: a command that cannot be started yields `Error: <reason>`,
/// which is what ends up in the report.
pub fn probe_output(command: &str) -> String {
    match execute(command, &CommandOptions::default()) {
        Ok(result) => result.probe_text(),
        Err(e) => {
            tracing::debug!("Probe '{}' failed to start: {}", command, e);
            format!("Error: {}", e)
        }
    }
}

/// Execute a command with streaming output.
pub fn execute_streaming(
    command: &str,
    options: &CommandOptions,
    callback: OutputCallback,
) -> Result<CommandResult> {
    let start = Instant::now();
    let spawn_failed = || EnvSyncError::CommandFailed {
        command: command.to_string(),
        code: None,
    };

    let mut child = build_command(command, options)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|_| spawn_failed())?;

    let stdout = child.stdout.take().ok_or_else(spawn_failed)?;
    let stderr = child.stderr.take().ok_or_else(spawn_failed)?;

    let (tx, rx) = mpsc::channel();
    let tx_stderr = tx.clone();

    let stdout_handle = thread::spawn(move || {
        let mut output = String::new();
        for line in BufReader::new(stdout)
            .lines()
            .map_while(std::result::Result::ok)
        {
            output.push_str(&line);
            output.push('\n');
            let _ = tx.send(OutputLine::Stdout(line));
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let mut output = String::new();
        for line in BufReader::new(stderr)
            .lines()
            .map_while(std::result::Result::ok)
        {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
        output
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = child.wait().map_err(|_| spawn_failed())?;

    Ok(CommandResult::from_status(
        status,
        stdout_output,
        stderr_output,
        start.elapsed(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 3", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("ENVSYNC_TEST_VAR".to_string(), "probe_value".to_string());

        let cmd = if cfg!(target_os = "windows") {
            "echo %ENVSYNC_TEST_VAR%"
        } else {
            "echo $ENVSYNC_TEST_VAR"
        };

        let result = execute(cmd, &options).unwrap();

        assert!(result.stdout.contains("probe_value"));
    }

    #[test]
    fn probe_text_prefers_stdout() {
        let result = CommandResult {
            exit_code: Some(0),
            stdout: "  v18.19.0\n".to_string(),
            stderr: "warning".to_string(),
            duration: Duration::ZERO,
            success: true,
        };
        assert_eq!(result.probe_text(), "v18.19.0");
    }

    #[test]
    fn probe_text_falls_back_to_stderr() {
        let result = CommandResult {
            exit_code: Some(0),
            stdout: "\n".to_string(),
            stderr: "openjdk version \"17.0.9\"\n".to_string(),
            duration: Duration::ZERO,
            success: true,
        };
        assert_eq!(result.probe_text(), "openjdk version \"17.0.9\"");
    }

    #[cfg(unix)]
    #[test]
    fn probe_output_reads_stderr() {
        assert_eq!(probe_output("echo to-stderr >&2"), "to-stderr");
    }

    #[cfg(unix)]
    #[test]
    fn probe_output_reports_missing_tool_text() {
        let text = probe_output("envsync-definitely-not-a-tool --version");
        assert!(!text.is_empty());
    }

    #[test]
    fn execute_streaming_captures_output() {
        use std::sync::{Arc, Mutex};

        let lines = Arc::new(Mutex::new(Vec::new()));
        let lines_clone = Arc::clone(&lines);

        let callback: OutputCallback = Box::new(move |line| {
            lines_clone.lock().unwrap().push(line);
        });

        let result =
            execute_streaming("echo line1 && echo line2", &CommandOptions::default(), callback)
                .unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("line2"));
        assert!(lines.lock().unwrap().len() >= 2);
    }
}
