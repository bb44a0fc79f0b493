//! Steps shared by the scan, dashboard and dockerfile commands.

use std::path::{Path, PathBuf};

use crate::config::{DockerSettings, EnvSyncConfig};
use crate::conflicts::{ConflictKind, ConflictReport};
use crate::dashboard;
use crate::docker;
use crate::error::{EnvSyncError, Result};
use crate::scan::{scan_project, EnvironmentReport};
use crate::shell::{OutputCallback, OutputLine};
use crate::ui::UserInterface;

/// Scan the environment behind a spinner.
pub fn run_scan(
    ui: &mut dyn UserInterface,
    project_root: &Path,
    config: &EnvSyncConfig,
) -> Result<EnvironmentReport> {
    let mut spinner = ui.start_spinner("Scanning environment...");
    match scan_project(project_root, config) {
        Ok(report) => {
            spinner.finish_success("Environment scanned");
            Ok(report)
        }
        Err(e) => {
            spinner.finish_error("Scan failed");
            Err(e)
        }
    }
}

/// Toolchain versions, one per line.
pub fn show_summary(ui: &mut dyn UserInterface, report: &EnvironmentReport) {
    let first_line = |s: &str| s.lines().next().unwrap_or_default().to_string();

    ui.key_value(
        "System",
        &format!(
            "{} {} ({})",
            report.os.system, report.os.release, report.os.machine
        ),
    );
    ui.key_value("Python", &first_line(&report.python.version));
    ui.key_value("Node.js", &first_line(&report.node.version));
    ui.key_value("npm", &first_line(&report.node.npm_version));
    ui.key_value("Java", &first_line(&report.java.version));
}

/// One line per conflict, grouped by ecosystem.
pub fn show_conflicts(ui: &mut dyn UserInterface, conflicts: &ConflictReport) {
    if conflicts.is_empty() {
        ui.success("No conflicts detected");
        return;
    }

    for (ecosystem, items) in conflicts.by_ecosystem() {
        for conflict in items {
            let line = format!("{}: {}", ecosystem, conflict.message);
            if conflict.kind == ConflictKind::ManualCheck {
                ui.message(&format!("  {}", line));
            } else {
                ui.warning(&line);
            }
            if let Some(suggestion) = &conflict.suggestion {
                ui.message(&format!("    {}", suggestion));
            }
        }
    }

    ui.warning(&format!(
        "{} conflict(s) detected, {} need attention",
        conflicts.total(),
        conflicts.actionable()
    ));
}

/// Write the Dockerfile next to the reports.
pub fn write_dockerfile(
    ui: &mut dyn UserInterface,
    report: &EnvironmentReport,
    dir: &Path,
    settings: &DockerSettings,
) -> Result<PathBuf> {
    let path = docker::write_dockerfile(report, dir, settings)?;
    ui.success(&format!("Dockerfile generated: {}", path.display()));
    Ok(path)
}

/// `docker build` of `dockerfile` with the project root as the context,
/// streaming output under a spinner.
pub fn build_image(
    ui: &mut dyn UserInterface,
    project_root: &Path,
    dockerfile: &Path,
    settings: &DockerSettings,
) -> Result<()> {
    let mut spinner = ui.start_spinner(&format!(
        "Building Docker image {} ...",
        settings.image_tag
    ));
    let on_output: OutputCallback = match spinner.output_callback() {
        Some(callback) => callback,
        None => Box::new(|_: OutputLine| {}),
    };

    match docker::build_image(project_root, dockerfile, settings, on_output) {
        Ok(result) => {
            spinner.finish_success(&format!(
                "Built image {} in {:.1}s",
                settings.image_tag,
                result.duration.as_secs_f64()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.finish_error(&format!("Failed to build image {}", settings.image_tag));
            Err(e)
        }
    }
}

/// Serve the dashboard until Ctrl-C, rescanning in the background.
pub fn serve_dashboard(
    ui: &mut dyn UserInterface,
    report: EnvironmentReport,
    project_root: &Path,
    config: &EnvSyncConfig,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| EnvSyncError::Server(format!("cannot start runtime: {}", e)))?;

    ui.message(&format!(
        "Starting EnvSync Dashboard at http://{} (Ctrl-C to stop)",
        dashboard::bind_address(&config.dashboard)
    ));

    let rescan_root = project_root.to_path_buf();
    let rescan_config = config.clone();
    runtime.block_on(dashboard::serve(report, &config.dashboard, move || {
        scan_project(&rescan_root, &rescan_config)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::Conflict;
    use crate::scan::{CannedProbe, EnvironmentScanner};
    use crate::ui::MockUI;

    #[test]
    fn no_conflicts_is_a_success() {
        let mut ui = MockUI::new();

        show_conflicts(&mut ui, &ConflictReport::default());

        assert!(ui.has_success("No conflicts detected"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn conflicts_are_warnings_and_manual_checks_are_messages() {
        let mut ui = MockUI::new();
        let conflicts = ConflictReport {
            python: vec![Conflict::missing("flask", Some("2.3.2"))],
            java: vec![Conflict::manual_check("guava", None)],
            ..Default::default()
        };

        show_conflicts(&mut ui, &conflicts);

        assert!(ui.has_warning("python: flask missing (required 2.3.2)"));
        assert!(ui.has_message("java: guava requires"));
        assert!(ui.has_warning("2 conflict(s) detected, 1 need attention"));
    }

    #[test]
    fn summary_shows_first_lines() {
        let probe = CannedProbe::new()
            .with("java -version", "openjdk version \"17.0.9\"\nOpenJDK Runtime")
            .with("node -v", "v20.11.1");
        let report = EnvironmentScanner::with_probe(probe, "python3").scan();
        let mut ui = MockUI::new();

        show_summary(&mut ui, &report);

        assert_eq!(
            ui.value_of("Java").as_deref(),
            Some("openjdk version \"17.0.9\"")
        );
        assert_eq!(ui.value_of("Node.js").as_deref(), Some("v20.11.1"));
    }
}
