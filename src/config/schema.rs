//! Configuration schema definitions for EnvSync.
//!
//! This module contains all the struct definitions that map to
//! the YAML configuration file format. Every field has a default, so an
//! empty (or absent) config file is valid.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `.envsync/config.yml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EnvSyncConfig {
    /// Where reports are written and what they are called
    pub reports: ReportSettings,

    /// Dockerfile generation and image build
    pub docker: DockerSettings,

    /// Live dashboard server
    pub dashboard: DashboardSettings,

    /// Python toolchain probing
    pub python: PythonSettings,

    /// Dependency manifest locations (relative to project root)
    pub manifests: ManifestPaths,
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ReportSettings {
    /// Directory for reports and the Dockerfile (relative to project root)
    pub output_dir: PathBuf,

    /// JSON report file name
    pub json_file: String,

    /// HTML report file name
    pub html_file: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            json_file: "envsync_report.json".to_string(),
            html_file: "envsync_report.html".to_string(),
        }
    }
}

/// Dockerfile generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DockerSettings {
    /// Dockerfile name
    pub dockerfile: String,

    /// Base image for the generated Dockerfile
    pub base_image: String,

    /// Node.js major version used when none is detected
    pub default_node_major: u32,

    /// apt package providing the JDK
    pub jdk_package: String,

    /// Tag applied by `--build`
    pub image_tag: String,
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            dockerfile: "Dockerfile".to_string(),
            base_image: "ubuntu:22.04".to_string(),
            default_node_major: 18,
            jdk_package: "openjdk-17-jdk".to_string(),
            image_tag: "envsync_pro:latest".to_string(),
        }
    }
}

/// Dashboard server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DashboardSettings {
    /// Address to bind
    pub host: String,

    /// Port to bind
    pub port: u16,

    /// How often the page polls `/api/report`, in seconds
    pub refresh_interval_secs: u64,

    /// How often the server rescans the environment, in seconds (0 disables)
    pub rescan_interval_secs: u64,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            refresh_interval_secs: 30,
            rescan_interval_secs: 30,
        }
    }
}

/// Python probing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PythonSettings {
    /// Interpreter to probe (name on PATH or absolute path)
    pub interpreter: String,
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
        }
    }
}

/// Manifest file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ManifestPaths {
    /// pip requirements file
    pub requirements: PathBuf,

    /// npm package manifest
    pub package_json: PathBuf,

    /// Maven project file
    pub pom: PathBuf,
}

impl Default for ManifestPaths {
    fn default() -> Self {
        Self {
            requirements: PathBuf::from("requirements.txt"),
            package_json: PathBuf::from("package.json"),
            pom: PathBuf::from("pom.xml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: EnvSyncConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EnvSyncConfig::default());
        assert_eq!(config.dashboard.port, 5000);
        assert_eq!(config.docker.image_tag, "envsync_pro:latest");
        assert_eq!(config.reports.json_file, "envsync_report.json");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let yaml = r#"
dashboard:
  port: 8080
docker:
  base_image: debian:bookworm
"#;
        let config: EnvSyncConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.dashboard.port, 8080);
        assert_eq!(config.dashboard.host, "127.0.0.1");
        assert_eq!(config.docker.base_image, "debian:bookworm");
        assert_eq!(config.docker.default_node_major, 18);
    }

    #[test]
    fn serializes_round_trip_through_yaml() {
        let config = EnvSyncConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("refresh_interval_secs: 30"));
        let parsed: EnvSyncConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn schema_lists_top_level_sections() {
        let schema = schemars::schema_for!(EnvSyncConfig);
        let json = serde_json::to_value(&schema).unwrap();
        let props = json["properties"].as_object().unwrap();
        for key in ["reports", "docker", "dashboard", "python", "manifests"] {
            assert!(props.contains_key(key), "missing {}", key);
        }
    }
}
