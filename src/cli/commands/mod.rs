//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Bare `envsync` is a scan.

pub mod completions;
pub mod config;
pub mod dashboard;
pub mod dispatcher;
pub mod dockerfile;
pub mod scan;
pub mod shared;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
