//! Command-line interface for EnvSync.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, ConfigArgs, DashboardArgs, DockerfileArgs, ScanArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
