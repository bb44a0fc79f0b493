//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{
    execute, execute_streaming, probe_output, CommandOptions, CommandResult,
    OutputCallback, OutputLine,
};
pub use platform::{detect_shell, is_ci, ShellInfo};
