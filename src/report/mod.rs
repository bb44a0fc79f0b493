//! Report generation.
//!
//! A scan is written twice: as JSON for tooling and as a standalone HTML
//! page for people. Both land in the configured output directory.

pub mod html;
pub mod json;
pub mod templates;

pub use html::render_html_report;
pub use json::render_json;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ReportSettings;
use crate::error::{EnvSyncError, Result};
use crate::scan::EnvironmentReport;

/// Paths of the reports that were written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub json: PathBuf,
    pub html: PathBuf,
}

/// Resolve the output directory against the project root.
pub fn output_dir(project_root: &Path, settings: &ReportSettings) -> PathBuf {
    project_root.join(&settings.output_dir)
}

/// Write `content` to `path`, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_err = |source| EnvSyncError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_err)?;
    }
    fs::write(path, content).map_err(to_err)
}

/// Write the JSON and HTML reports.
pub fn write_reports(
    report: &EnvironmentReport,
    project_root: &Path,
    settings: &ReportSettings,
) -> Result<WrittenReports> {
    let dir = output_dir(project_root, settings);

    let json = dir.join(&settings.json_file);
    write_file(&json, &render_json(report)?)?;
    tracing::debug!("Wrote {}", json.display());

    let html = dir.join(&settings.html_file);
    write_file(&html, &render_html_report(report)?)?;
    tracing::debug!("Wrote {}", html.display());

    Ok(WrittenReports { json, html })
}
