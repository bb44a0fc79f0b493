//! Scan command implementation.
//!
//! The `envsync scan` command (and bare `envsync`) scans the machine, writes
//! the JSON and HTML reports and the Dockerfile, then optionally builds the
//! image and serves the dashboard.

use std::path::{Path, PathBuf};

use crate::cli::args::ScanArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::report::{output_dir, write_reports};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::shared;

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ScanArgs,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ScanArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for ScanCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        ui.show_header("EnvSync");
        let report = shared::run_scan(ui, &self.project_root, &config)?;
        shared::show_summary(ui, &report);
        shared::show_conflicts(ui, &report.conflicts);

        let written = write_reports(&report, &self.project_root, &config.reports)?;
        ui.success(&format!("JSON report saved to {}", written.json.display()));
        ui.success(&format!("HTML report saved to {}", written.html.display()));

        let dir = output_dir(&self.project_root, &config.reports);
        let dockerfile = shared::write_dockerfile(ui, &report, &dir, &config.docker)?;

        if self.args.build {
            shared::build_image(ui, &self.project_root, &dockerfile, &config.docker)?;
        }

        if self.args.dashboard {
            shared::serve_dashboard(ui, report, &self.project_root, &config)?;
        } else {
            ui.success("EnvSync complete: reports and Dockerfile ready");
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

    #[test]
    fn writes_reports_and_dockerfile() {
        let temp = TempDir::new().unwrap();
        let cmd = ScanCommand::new(temp.path(), None, ScanArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.is_success());
        assert!(temp.path().join("envsync_report.json").exists());
        assert!(temp.path().join("envsync_report.html").exists());
        assert!(temp.path().join("Dockerfile").exists());
        assert!(ui.has_success("JSON report saved to"));
        assert!(ui.has_success("HTML report saved to"));
        assert!(ui.has_success("Dockerfile generated"));
        assert!(ui.has_success("EnvSync complete"));
        assert!(ui.has_spinner_result(true, "Environment scanned"));
    }

    #[test]
    fn malformed_manifest_fails_the_spinner() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        let cmd = ScanCommand::new(temp.path(), None, ScanArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).err().unwrap();

        assert!(err.to_string().contains("package.json"));
        assert!(ui.has_spinner_result(false, "Scan failed"));
        assert!(!temp.path().join("envsync_report.json").exists());
    }

    #[test]
    fn honours_output_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".envsync")).unwrap();
        fs::write(
            temp.path().join(".envsync/config.yml"),
            "reports:\n  output_dir: build/envsync\n",
        )
        .unwrap();
        let cmd = ScanCommand::new(temp.path(), None, ScanArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let out = temp.path().join("build/envsync");
        assert!(out.join("envsync_report.json").exists());
        assert!(out.join("Dockerfile").exists());
    }

    #[test]
    fn reports_missing_requirements() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "envsync-test-package-that-is-not-installed==1.0.0\n",
        )
        .unwrap();
        let cmd = ScanCommand::new(temp.path(), None, ScanArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_warning("envsync-test-package-that-is-not-installed missing"));
        let json = fs::read_to_string(temp.path().join("envsync_report.json")).unwrap();
        assert!(json.contains("\"kind\": \"missing\""));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("envsync.yml");
        fs::write(&config, "dashboard:\n  port: 0\n").unwrap();
        let cmd = ScanCommand::new(temp.path(), Some(&config), ScanArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).err().unwrap();

        assert_eq!(err.exit_code(), 2);
        assert!(!temp.path().join("envsync_report.json").exists());
    }
}
