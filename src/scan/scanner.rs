//! Toolchain scanning.

use chrono::Utc;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::conflicts::ConflictReport;
use crate::manifest::requirements::normalize_name;

use super::probe::{Probe, ShellProbe};
use super::types::{EnvironmentReport, JavaInfo, NodeInfo, OsInfo, PythonInfo};

static LEADING_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("LEADING_VERSION must compile"));

static WINDOWS_BUILD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.\d+\.\d+").expect("WINDOWS_BUILD must compile"));

#[derive(Deserialize)]
struct PipPackage {
    name: String,
    version: String,
}

/// Gathers the OS, Python, Java and Node.js sections of a report.
///
/// # Example
///
/// ```
/// use envsync::scan::{CannedProbe, EnvironmentScanner};
///
/// let probe = CannedProbe::new().with("node -v", "v20.11.1");
/// let report = EnvironmentScanner::with_probe(probe, "python3").scan();
/// assert_eq!(report.node.version, "v20.11.1");
/// assert!(report.conflicts.is_empty());
/// ```
pub struct EnvironmentScanner<P: Probe = ShellProbe> {
    probe: P,
    python_interpreter: String,
}

impl EnvironmentScanner<ShellProbe> {
    /// Scanner that probes the real machine.
    pub fn new(python_interpreter: &str) -> Self {
        Self::with_probe(ShellProbe, python_interpreter)
    }
}

impl<P: Probe> EnvironmentScanner<P> {
    /// Scanner using a custom probe.
    pub fn with_probe(probe: P, python_interpreter: &str) -> Self {
        Self {
            probe,
            python_interpreter: python_interpreter.to_string(),
        }
    }

    /// Run every probe. Conflicts are left empty; see
    /// [`ConflictDetector`](crate::conflicts::ConflictDetector).
    pub fn scan(&self) -> EnvironmentReport {
        tracing::debug!("Scanning environment");

        EnvironmentReport {
            os: self.scan_os(),
            python: self.scan_python(),
            java: self.scan_java(),
            node: self.scan_node(),
            conflicts: ConflictReport::default(),
            generated_at: Utc::now(),
        }
    }

    /// Operating system details.
    pub fn scan_os(&self) -> OsInfo {
        let (release, version) = if cfg!(target_os = "windows") {
            let ver = self.probe.run("ver");
            let release = WINDOWS_BUILD
                .captures(&ver)
                .map(|c| c[1].to_string())
                .unwrap_or_default();
            (release, ver)
        } else {
            (self.probe.run("uname -r"), self.probe.run("uname -v"))
        };

        OsInfo {
            system: system_name(std::env::consts::OS),
            release,
            version,
            machine: std::env::consts::ARCH.to_string(),
        }
    }

    /// Python version, executable path and installed packages.
    ///
    /// When the default `python3` is absent, plain `python` is tried.
    pub fn scan_python(&self) -> PythonInfo {
        let mut interpreter = self.python_interpreter.as_str();
        let mut info = self.python_identity(interpreter);

        if !LEADING_VERSION.is_match(&info.0) && interpreter == "python3" {
            tracing::debug!("python3 not usable, trying python");
            let fallback = self.python_identity("python");
            if LEADING_VERSION.is_match(&fallback.0) {
                interpreter = "python";
                info = fallback;
            }
        }

        let (version, executable) = info;
        let packages = if LEADING_VERSION.is_match(&version) {
            self.python_packages(interpreter)
        } else {
            tracing::warn!("Python not found: {}", version);
            BTreeMap::new()
        };

        PythonInfo {
            version,
            executable,
            packages,
        }
    }

    fn python_identity(&self, interpreter: &str) -> (String, String) {
        let output = self.probe.run(&format!(
            "{} -c \"import sys; print(sys.version.split()[0]); print(sys.executable)\"",
            interpreter
        ));

        let mut lines = output.lines();
        match (lines.next(), lines.next()) {
            (Some(version), Some(executable)) if LEADING_VERSION.is_match(version.trim()) => {
                (version.trim().to_string(), executable.trim().to_string())
            }
            _ => (output, String::new()),
        }
    }

    fn python_packages(&self, interpreter: &str) -> BTreeMap<String, String> {
        let output = self.probe.run(&format!(
            "{} -m pip list --format=json --disable-pip-version-check",
            interpreter
        ));

        match serde_json::from_str::<Vec<PipPackage>>(&output) {
            Ok(packages) => packages
                .into_iter()
                .map(|p| (normalize_name(&p.name), p.version))
                .collect(),
            Err(e) => {
                tracing::warn!("Could not list Python packages: {}", e);
                BTreeMap::new()
            }
        }
    }

    /// Java runtime and compiler versions.
    pub fn scan_java(&self) -> JavaInfo {
        JavaInfo {
            version: self.probe.run("java -version"),
            javac_version: self.probe.run("javac -version"),
        }
    }

    /// Node.js, npm and global packages.
    pub fn scan_node(&self) -> NodeInfo {
        NodeInfo {
            version: self.probe.run("node -v"),
            npm_version: self.probe.run("npm -v"),
            global_packages: self.probe.run("npm list -g --depth=0"),
        }
    }
}

/// Map Rust's OS identifier to the conventional system name.
fn system_name(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
