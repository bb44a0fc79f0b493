//! Configuration loading, parsing, and validation for EnvSync.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layer merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envsync::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::create_dir_all(temp.path().join(".envsync")).unwrap();
//! fs::write(temp.path().join(".envsync/config.yml"), "dashboard:\n  port: 8080\n").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.dashboard.port, 8080);
//! ```
//!
//! # Configuration File Locations
//!
//! EnvSync discovers and merges configuration in this order:
//! 1. User global config (`~/.envsync/config.yml`)
//! 2. Project config (`.envsync/config.yml`)
//! 3. Local overrides (`.envsync/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_value, load_merged_config, ConfigPaths, CONFIG_DIR};
pub use merger::{deep_merge, merge_layers};
pub use schema::{
    DashboardSettings, DockerSettings, EnvSyncConfig, ManifestPaths, PythonSettings,
    ReportSettings,
};
pub use validator::{validate, validate_config, ValidationError};
