//! Dockerfile command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::DockerfileArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::report::output_dir;
use crate::scan::EnvironmentScanner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::shared;

/// The dockerfile command implementation.
///
/// Only the toolchains are probed; manifests are not read.
pub struct DockerfileCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: DockerfileArgs,
}

impl DockerfileCommand {
    /// Create a new dockerfile command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: DockerfileArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for DockerfileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        let mut spinner = ui.start_spinner("Scanning environment...");
        let report = EnvironmentScanner::new(&config.python.interpreter).scan();
        spinner.finish_success("Environment scanned");

        let dir = output_dir(&self.project_root, &config.reports);
        let dockerfile = shared::write_dockerfile(ui, &report, &dir, &config.docker)?;

        if self.args.build {
            shared::build_image(ui, &self.project_root, &dockerfile, &config.docker)?;
        }

        Ok(CommandResult::success())
    }
}
