//! Config command implementation.
//!
//! The `envsync config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigPaths, EnvSyncConfig};
use crate::error::{EnvSyncError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn config_files(&self) -> Vec<PathBuf> {
        match &self.config_path {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(EnvSyncConfig);
            let json =
                serde_json::to_string_pretty(&schema).map_err(|e| EnvSyncError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let files = self.config_files();
        if files.is_empty() {
            ui.message("# No config files found; showing defaults");
        } else {
            for path in &files {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| EnvSyncError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let yaml = serde_yaml::to_string(&config).map_err(|e| EnvSyncError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".envsync");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn shows_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.is_success());
        assert!(ui.has_message("showing defaults"));
        assert!(ui.has_message("image_tag: envsync_pro:latest"));
    }

    #[test]
    fn shows_config_path_and_values() {
        let temp = setup_project("dashboard:\n  port: 8080\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("config.yml"));
        assert!(ui.has_message("port: 8080"));
    }

    #[test]
    fn json_output() {
        let temp = setup_project("python:\n  interpreter: python3.12\n");
        let args = ConfigArgs {
            json: true,
            ..Default::default()
        };
        let cmd = ConfigCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("\"interpreter\": \"python3.12\""));
    }

    #[test]
    fn schema_output_needs_no_config() {
        let temp = setup_project("dashboard:\n  port: 0\n");
        let args = ConfigArgs {
            schema: true,
            ..Default::default()
        };
        let cmd = ConfigCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("\"refresh_interval_secs\""));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = setup_project("dashboard: [not, a, mapping]\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }
}
