//! Routing from parsed arguments to commands.

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::config::ConfigCommand;
use super::dashboard::DashboardCommand;
use super::dockerfile::DockerfileCommand;
use super::scan::ScanCommand;

/// One CLI subcommand.
pub trait Command {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Outcome of a command that ran to completion.
///
/// Failures travel as [`EnvSyncError`](crate::error::EnvSyncError) instead,
/// which carries its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: u8,
}

impl CommandResult {
    pub const fn success() -> Self {
        Self { exit_code: 0 }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config_path,
        }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, the top-level `--build` / `--dashboard` flags
    /// drive a scan.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = &self.project_root;
        let config = self.config_path.as_deref();

        match &cli.command {
            Some(Commands::Scan(args)) => ScanCommand::new(root, config, args.clone()).execute(ui),
            Some(Commands::Dashboard(args)) => {
                DashboardCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Dockerfile(args)) => {
                DockerfileCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Config(args)) => {
                ConfigCommand::new(root, config, args.clone()).execute(ui)
            }
            Some(Commands::Completions(args)) => CompletionsCommand::new(args.clone()).execute(ui),
            None => ScanCommand::new(root, config, cli.scan.clone()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn success_exits_zero() {
        let result = CommandResult::success();
        assert!(result.is_success());
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_config_command() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["envsync", "config"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.is_success());
        assert!(ui.has_message("dashboard:"));
    }

    #[test]
    fn no_subcommand_runs_scan() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["envsync"]);
        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf(), None);
        let mut ui = MockUI::new();

        dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(temp.path().join("envsync_report.json").exists());
    }
}
