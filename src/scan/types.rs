//! Environment report types.
//!
//! [`EnvironmentReport`] is serialized as-is into the JSON report and the
//! dashboard's `/api/report` response, so field names are part of the
//! public interface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::conflicts::ConflictReport;

/// Everything known about the machine and the project's conflicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    pub os: OsInfo,
    pub python: PythonInfo,
    pub java: JavaInfo,
    pub node: NodeInfo,
    #[serde(default)]
    pub conflicts: ConflictReport,
    pub generated_at: DateTime<Utc>,
}

/// Operating system details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsInfo {
    /// `Linux`, `Darwin`, `Windows`, ...
    pub system: String,
    /// Kernel release (`uname -r`).
    pub release: String,
    /// Kernel build string (`uname -v`).
    pub version: String,
    /// CPU architecture.
    pub machine: String,
}

impl OsInfo {
    /// Key/value pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("system", &self.system),
            ("release", &self.release),
            ("version", &self.version),
            ("machine", &self.machine),
        ]
    }
}

/// Python interpreter and installed packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PythonInfo {
    pub version: String,
    pub executable: String,
    /// Normalized package name → installed version.
    pub packages: BTreeMap<String, String>,
}

/// Java runtime and compiler versions, as printed by the tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JavaInfo {
    pub version: String,
    pub javac_version: String,
}

/// Node.js, npm and the raw global package listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub version: String,
    pub npm_version: String,
    /// Output of `npm list -g --depth=0`.
    pub global_packages: String,
}
