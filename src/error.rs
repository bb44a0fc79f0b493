//! Error types for EnvSync operations.
//!
//! This module defines [`EnvSyncError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvSyncError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnvSyncError::Other`) for unexpected errors
//! - Probe failures are not errors: they end up as text in the report

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for EnvSync operations.
#[derive(Debug, Error)]
pub enum EnvSyncError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A dependency manifest exists but could not be parsed.
    #[error("Failed to parse manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Shell command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// A report or generated file could not be written.
    #[error("Failed to write {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report template failed to render.
    #[error("Template error: {0}")]
    Template(String),

    /// The dashboard server failed to start or crashed.
    #[error("Dashboard server error: {0}")]
    Server(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnvSyncError {
    /// Process exit code for this error: 2 for configuration problems,
    /// 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigParseError { .. } | Self::ConfigValidationError { .. } => 2,
            _ => 1,
        }
    }
}

/// Result type alias for EnvSync operations.
pub type Result<T> = std::result::Result<T, EnvSyncError>;
