//! Environment scanning.
//!
//! - [`EnvironmentScanner`] probes the OS and the Python, Java and Node.js
//!   toolchains
//! - [`Probe`] is the seam between the scanner and the shell
//! - [`scan_project`] runs a scan and attaches the project's conflicts

pub mod node;
pub mod probe;
pub mod scanner;
pub mod types;

pub use node::parse_global_packages;
pub use probe::{CannedProbe, Probe, ShellProbe};
pub use scanner::EnvironmentScanner;
pub use types::{EnvironmentReport, JavaInfo, NodeInfo, OsInfo, PythonInfo};

use std::path::Path;

use crate::config::EnvSyncConfig;
use crate::conflicts::ConflictDetector;
use crate::error::Result;
use crate::manifest::ProjectManifests;

/// Scan the machine and detect conflicts against the project's manifests.
pub fn scan_project(project_root: &Path, config: &EnvSyncConfig) -> Result<EnvironmentReport> {
    scan_project_with(
        &EnvironmentScanner::new(&config.python.interpreter),
        project_root,
        config,
    )
}

/// [`scan_project`] with a caller-supplied scanner.
pub fn scan_project_with<P: Probe>(
    scanner: &EnvironmentScanner<P>,
    project_root: &Path,
    config: &EnvSyncConfig,
) -> Result<EnvironmentReport> {
    let manifests = ProjectManifests::load(project_root, &config.manifests)?;

    let mut report = scanner.scan();
    report.conflicts = ConflictDetector::detect(&report, &manifests, project_root);

    tracing::info!(
        "Scan complete: {} conflict(s) across python/node/java",
        report.conflicts.total()
    );

    Ok(report)
}
