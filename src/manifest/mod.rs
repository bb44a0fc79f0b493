//! Project dependency manifests.
//!
//! A manifest that does not exist contributes no requirements; one that
//! exists but cannot be parsed is an error, since silently ignoring it
//! would report a clean environment.

pub mod package_json;
pub mod pom;
pub mod requirements;

pub use package_json::parse_package_json;
pub use pom::parse_pom;
pub use requirements::parse_requirements;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ManifestPaths;
use crate::error::{EnvSyncError, Result};

/// Dependencies declared by the project, per ecosystem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectManifests {
    /// `requirements.txt`: package → pinned version.
    pub python: BTreeMap<String, Option<String>>,

    /// `package.json` dependencies: package → version range.
    pub node: BTreeMap<String, String>,

    /// `pom.xml`: artifactId → version.
    pub java: BTreeMap<String, Option<String>>,
}

impl ProjectManifests {
    /// Load every configured manifest relative to `project_root`.
    pub fn load(project_root: &Path, paths: &ManifestPaths) -> Result<Self> {
        let mut manifests = Self::default();

        let requirements = project_root.join(&paths.requirements);
        if let Some(content) = read_optional(&requirements)? {
            manifests.python = parse_requirements(&content);
            tracing::debug!(
                "Loaded {} Python requirements from {}",
                manifests.python.len(),
                requirements.display()
            );
        }

        let package_json = project_root.join(&paths.package_json);
        if let Some(content) = read_optional(&package_json)? {
            manifests.node =
                parse_package_json(&content).map_err(|e| manifest_error(&package_json, e))?;
            tracing::debug!(
                "Loaded {} Node dependencies from {}",
                manifests.node.len(),
                package_json.display()
            );
        }

        let pom = project_root.join(&paths.pom);
        if let Some(content) = read_optional(&pom)? {
            manifests.java = parse_pom(&content).map_err(|e| manifest_error(&pom, e))?;
            tracing::debug!(
                "Loaded {} Maven dependencies from {}",
                manifests.java.len(),
                pom.display()
            );
        }

        Ok(manifests)
    }

    /// Whether no manifest declared anything.
    pub fn is_empty(&self) -> bool {
        self.python.is_empty() && self.node.is_empty() && self.java.is_empty()
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        // not UTF-8
        Err(e) if e.kind() == std::io::ErrorKind::InvalidData => Err(manifest_error(path, e)),
        Err(e) => Err(e.into()),
    }
}

fn manifest_error(path: &Path, err: impl std::fmt::Display) -> EnvSyncError {
    EnvSyncError::ManifestParse {
        path: PathBuf::from(path),
        message: err.to_string(),
    }
}
