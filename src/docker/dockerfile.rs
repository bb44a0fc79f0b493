//! Dockerfile generation.

use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::DockerSettings;
use crate::error::Result;
use crate::report::templates::{render_text, DOCKERFILE};
use crate::report::write_file;
use crate::scan::EnvironmentReport;

static NODE_MAJOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v?(\d+)\.").expect("NODE_MAJOR must compile"));

#[derive(Serialize)]
struct DockerfileContext<'a> {
    base_image: &'a str,
    jdk_package: &'a str,
    node_major: u32,
}

/// Major version from `node -v` output, or `default` when Node.js was not
/// found or printed something else.
pub fn node_major(node_version: &str, default: u32) -> u32 {
    NODE_MAJOR
        .captures(node_version.trim())
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(default)
}

/// Render a Dockerfile reproducing the scanned toolchains.
pub fn render_dockerfile(report: &EnvironmentReport, settings: &DockerSettings) -> Result<String> {
    let context = DockerfileContext {
        base_image: &settings.base_image,
        jdk_package: &settings.jdk_package,
        node_major: node_major(&report.node.version, settings.default_node_major),
    };
    render_text(DOCKERFILE, &context)
}

/// Render and write the Dockerfile into `dir`.
pub fn write_dockerfile(
    report: &EnvironmentReport,
    dir: &Path,
    settings: &DockerSettings,
) -> Result<PathBuf> {
    let path = dir.join(&settings.dockerfile);
    write_file(&path, &render_dockerfile(report, settings)?)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{CannedProbe, EnvironmentScanner};
    use tempfile::TempDir;

    fn report_with_node(version: &str) -> EnvironmentReport {
        let probe = CannedProbe::new().with("node -v", version);
        EnvironmentScanner::with_probe(probe, "python3").scan()
    }

    #[test]
    fn extracts_node_major() {
        assert_eq!(node_major("v20.11.1", 18), 20);
        assert_eq!(node_major("16.20.2\n", 18), 16);
    }

    #[test]
    fn falls_back_to_default_major() {
        assert_eq!(node_major("", 18), 18);
        assert_eq!(node_major("sh: 1: node: not found", 18), 18);
        assert_eq!(node_major("Error: Command failed", 20), 20);
    }

    #[test]
    fn renders_expected_dockerfile() {
        let dockerfile =
            render_dockerfile(&report_with_node("v20.11.1"), &DockerSettings::default()).unwrap();

        assert!(dockerfile.starts_with("# Auto-generated by EnvSync\nFROM ubuntu:22.04\n"));
        assert!(dockerfile.contains("openjdk-17-jdk curl gnupg git"));
        assert!(dockerfile.contains("https://deb.nodesource.com/setup_20.x | bash -"));
        assert!(dockerfile.contains("WORKDIR /app"));
        assert!(dockerfile.contains("pip3 install -r requirements.txt || true"));
        assert!(dockerfile.trim_end().ends_with("CMD [\"bash\"]"));
    }

    #[test]
    fn uses_default_major_without_node() {
        let report = EnvironmentScanner::with_probe(CannedProbe::new(), "python3").scan();

        let dockerfile = render_dockerfile(&report, &DockerSettings::default()).unwrap();

        assert!(dockerfile.contains("setup_18.x"));
    }

    #[test]
    fn settings_are_not_escaped() {
        let settings = DockerSettings {
            base_image: "registry.example.com/base:22.04@sha256=abc".to_string(),
            ..Default::default()
        };

        let dockerfile = render_dockerfile(&report_with_node("v18.19.0"), &settings).unwrap();

        assert!(dockerfile.contains("FROM registry.example.com/base:22.04@sha256=abc\n"));
    }

    #[test]
    fn writes_dockerfile() {
        let temp = TempDir::new().unwrap();

        let path = write_dockerfile(
            &report_with_node("v18.19.0"),
            temp.path(),
            &DockerSettings::default(),
        )
        .unwrap();

        assert_eq!(path, temp.path().join("Dockerfile"));
        assert!(std::fs::read_to_string(path).unwrap().contains("setup_18.x"));
    }
}
