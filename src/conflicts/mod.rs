//! Dependency conflict detection.
//!
//! Compares what the project's manifests declare with what the scan found:
//!
//! - Python: each requirement must be installed, and match its `==` pin
//! - Node.js: each dependency must be installed globally, and satisfy its
//!   npm range (see [`npm_range`])
//! - Java: Maven resolves artifacts itself, so every dependency is listed
//!   for manual review
//! - Any ecosystem: competing lockfiles in the project root

pub mod lockfiles;
pub mod npm_range;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::manifest::ProjectManifests;
use crate::scan::{parse_global_packages, EnvironmentReport};

use npm_range::satisfies;

/// What kind of problem a conflict is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Declared but not installed.
    Missing,
    /// Installed at a version the manifest does not accept.
    VersionMismatch,
    /// Cannot be verified automatically.
    ManualCheck,
    /// Several package managers' lockfiles are present.
    CompetingLockfiles,
}

/// A single detected conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub package: String,
    pub kind: ConflictKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Conflict {
    /// `<pkg> missing (required <ver>)`
    pub fn missing(package: &str, required: Option<&str>) -> Self {
        Self {
            package: package.to_string(),
            kind: ConflictKind::Missing,
            required: required.map(str::to_string),
            found: None,
            message: format!(
                "{} missing (required {})",
                package,
                required.unwrap_or("any version")
            ),
            suggestion: None,
        }
    }

    /// `<pkg> version mismatch: required <req>, found <inst>`
    pub fn version_mismatch(package: &str, required: &str, found: &str) -> Self {
        Self {
            package: package.to_string(),
            kind: ConflictKind::VersionMismatch,
            required: Some(required.to_string()),
            found: Some(found.to_string()),
            message: format!(
                "{} version mismatch: required {}, found {}",
                package, required, found
            ),
            suggestion: None,
        }
    }

    /// `<artifact> requires <ver> (manual check)`
    pub fn manual_check(package: &str, required: Option<&str>) -> Self {
        Self {
            package: package.to_string(),
            kind: ConflictKind::ManualCheck,
            required: required.map(str::to_string),
            found: None,
            message: format!(
                "{} requires {} (manual check)",
                package,
                required.unwrap_or("an unspecified version")
            ),
            suggestion: None,
        }
    }

    /// Several lockfiles; `package` lists them.
    pub fn competing_lockfiles(files: &[&str], message: String, suggestion: String) -> Self {
        Self {
            package: files.join(", "),
            kind: ConflictKind::CompetingLockfiles,
            required: None,
            found: None,
            message,
            suggestion: Some(suggestion),
        }
    }
}

/// Conflicts grouped by ecosystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    #[serde(default)]
    pub python: Vec<Conflict>,
    #[serde(default)]
    pub node: Vec<Conflict>,
    #[serde(default)]
    pub java: Vec<Conflict>,
}

impl ConflictReport {
    /// Total number of conflicts.
    pub fn total(&self) -> usize {
        self.python.len() + self.node.len() + self.java.len()
    }

    /// Whether nothing was found.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Ecosystems with their conflicts, in report order.
    pub fn by_ecosystem(&self) -> [(&'static str, &[Conflict]); 3] {
        [
            ("python", &self.python),
            ("node", &self.node),
            ("java", &self.java),
        ]
    }

    /// Conflicts that can be acted on (everything except manual checks).
    pub fn actionable(&self) -> usize {
        self.by_ecosystem()
            .iter()
            .flat_map(|(_, conflicts)| conflicts.iter())
            .filter(|c| c.kind != ConflictKind::ManualCheck)
            .count()
    }
}

/// Detects conflicts between manifests and a scanned environment.
pub struct ConflictDetector;

impl ConflictDetector {
    /// Detect all conflicts.
    pub fn detect(
        report: &EnvironmentReport,
        manifests: &ProjectManifests,
        project_root: &Path,
    ) -> ConflictReport {
        let mut conflicts = ConflictReport {
            python: Self::detect_python(report, manifests),
            node: Self::detect_node(report, manifests),
            java: Self::detect_java(manifests),
        };

        if let Some(conflict) = lockfiles::python_lockfile_conflict(project_root) {
            conflicts.python.push(conflict);
        }
        if let Some(conflict) = lockfiles::node_lockfile_conflict(project_root) {
            conflicts.node.push(conflict);
        }

        conflicts
    }

    fn detect_python(report: &EnvironmentReport, manifests: &ProjectManifests) -> Vec<Conflict> {
        manifests
            .python
            .iter()
            .filter_map(|(package, pin)| {
                match (report.python.packages.get(package), pin) {
                    (None, _) => Some(Conflict::missing(package, pin.as_deref())),
                    (Some(installed), Some(required)) if installed != required => {
                        Some(Conflict::version_mismatch(package, required, installed))
                    }
                    _ => None,
                }
            })
            .collect()
    }

    fn detect_node(report: &EnvironmentReport, manifests: &ProjectManifests) -> Vec<Conflict> {
        let installed = parse_global_packages(&report.node.global_packages);

        manifests
            .node
            .iter()
            .filter_map(|(package, range)| match installed.get(package) {
                None => Some(Conflict::missing(package, Some(range))),
                Some(version) if !satisfies(version, range) => {
                    Some(Conflict::version_mismatch(package, range, version))
                }
                Some(_) => None,
            })
            .collect()
    }

    fn detect_java(manifests: &ProjectManifests) -> Vec<Conflict> {
        manifests
            .java
            .iter()
            .map(|(artifact, version)| Conflict::manual_check(artifact, version.as_deref()))
            .collect()
    }
}
