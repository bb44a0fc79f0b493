//! Configuration file discovery and loading.
//!
//! Unlike a setup tool, a scanner must work in any directory, so a missing
//! configuration is never an error: the built-in defaults apply.

use crate::config::merger::merge_layers;
use crate::config::schema::EnvSyncConfig;
use crate::error::{EnvSyncError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".envsync";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.envsync/config.yml`)
/// 2. Project config (`.envsync/config.yml`)
/// 3. Local overrides (`.envsync/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR).join("config.yml"))
                .filter(|p| p.is_file()),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}

/// Load a config file as raw YAML, treating an empty file as an empty mapping.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Mapping(Default::default()));
    }

    serde_yaml::from_str(&content).map_err(|e| EnvSyncError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered layer for a project.
pub fn load_merged_config(project_root: &Path) -> Result<EnvSyncConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    tracing::debug!("Config layers: {:?}", existing);

    let mut layers = Vec::with_capacity(existing.len());
    for path in &existing {
        layers.push(load_config_value(path)?);
    }

    let source = existing
        .last()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| project_root.join(CONFIG_DIR).join("config.yml"));

    serde_yaml::from_value(merge_layers(&layers)).map_err(|e| EnvSyncError::ConfigParseError {
        path: source,
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EnvSyncConfig> {
    let config = match config_override {
        Some(path) => {
            let value = load_config_value(path)?;
            serde_yaml::from_value(value).map_err(|e| EnvSyncError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        }
        None => load_merged_config(project_root)?,
    };

    super::validate(&config)?;
    Ok(config)
}
