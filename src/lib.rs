//! EnvSync - environment scanning and dependency conflict detection.
//!
//! EnvSync probes the local OS and the Python, Node.js and Java toolchains,
//! compares them with the project's `requirements.txt`, `package.json` and
//! `pom.xml`, and writes JSON and HTML reports plus a Dockerfile that
//! reproduces the toolchain. A small web dashboard serves the live report.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`conflicts`] - Manifest vs. environment conflict detection
//! - [`dashboard`] - Live dashboard HTTP server
//! - [`docker`] - Dockerfile generation and image builds
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Dependency manifest parsers
//! - [`report`] - JSON and HTML report writers
//! - [`scan`] - Toolchain probes
//! - [`shell`] - Shell command execution
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use envsync::manifest::requirements::parse_requirements;
//!
//! let reqs = parse_requirements("Flask==2.3.2\nrequests>=2.0\n");
//! assert_eq!(reqs["flask"].as_deref(), Some("2.3.2"));
//! assert_eq!(reqs["requests"], None);
//! ```

pub mod cli;
pub mod config;
pub mod conflicts;
pub mod dashboard;
pub mod docker;
pub mod error;
pub mod manifest;
pub mod report;
pub mod scan;
pub mod shell;
pub mod ui;

pub use error::{EnvSyncError, Result};
