//! Configuration validation rules.
//!
//! All errors are collected rather than stopping at the first one, so
//! users can fix several issues at once.

use crate::config::schema::EnvSyncConfig;
use crate::error::{EnvSyncError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Dotted path of the offending key
    pub key: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, key: &str, message: &str) -> Self {
        Self {
            rule: rule.to_string(),
            key: key.to_string(),
            message: format!("{}: {}", key, message),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &EnvSyncConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.dashboard.port == 0 {
        errors.push(ValidationError::new(
            "invalid-port",
            "dashboard.port",
            "must be between 1 and 65535",
        ));
    }

    if config.dashboard.refresh_interval_secs == 0 {
        errors.push(ValidationError::new(
            "invalid-interval",
            "dashboard.refresh_interval_secs",
            "must be at least 1 second",
        ));
    }

    if config.dashboard.host.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-value",
            "dashboard.host",
            "must not be empty",
        ));
    }

    if config.docker.image_tag.trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-value",
            "docker.image_tag",
            "must not be empty",
        ));
    }

    if config.docker.image_tag.chars().any(char::is_whitespace) {
        errors.push(ValidationError::new(
            "invalid-tag",
            "docker.image_tag",
            "must not contain whitespace",
        ));
    }

    for (key, value) in [
        ("reports.json_file", &config.reports.json_file),
        ("reports.html_file", &config.reports.html_file),
        ("docker.dockerfile", &config.docker.dockerfile),
        ("python.interpreter", &config.python.interpreter),
    ] {
        if value.trim().is_empty() {
            errors.push(ValidationError::new("empty-value", key, "must not be empty"));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &EnvSyncConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnvSyncError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
