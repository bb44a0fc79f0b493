//! Dashboard command implementation.
//!
//! The `envsync dashboard` command scans once and serves the result.

use std::path::{Path, PathBuf};

use crate::cli::args::DashboardArgs;
use crate::config::{load_config, validate, EnvSyncConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::shared;

/// The dashboard command implementation.
pub struct DashboardCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: DashboardArgs,
}

impl DashboardCommand {
    /// Create a new dashboard command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: DashboardArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Configuration with `--host` / `--port` applied.
    fn config(&self) -> Result<EnvSyncConfig> {
        let mut config = load_config(&self.project_root, self.config_path.as_deref())?;
        if let Some(host) = &self.args.host {
            config.dashboard.host = host.clone();
        }
        if let Some(port) = self.args.port {
            config.dashboard.port = port;
        }
        validate(&config)?;
        Ok(config)
    }
}

impl Command for DashboardCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config()?;

        let report = shared::run_scan(ui, &self.project_root, &config)?;
        shared::show_conflicts(ui, &report.conflicts);
        shared::serve_dashboard(ui, report, &self.project_root, &config)?;

        Ok(CommandResult::success())
    }
}
