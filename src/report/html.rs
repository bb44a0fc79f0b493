//! Standalone HTML report.

use serde::Serialize;

use crate::conflicts::Conflict;
use crate::error::Result;
use crate::scan::EnvironmentReport;

use super::templates::{render_html, REPORT_HTML};

#[derive(Serialize)]
struct Entry<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct Issue<'a> {
    message: &'a str,
    suggestion: Option<&'a str>,
}

#[derive(Serialize)]
struct Ecosystem<'a> {
    name: &'a str,
    issues: Vec<Issue<'a>>,
}

#[derive(Serialize)]
struct PythonView<'a> {
    version: &'a str,
    executable: &'a str,
    package_count: usize,
}

#[derive(Serialize)]
struct ReportView<'a> {
    os: Vec<Entry<'a>>,
    python: PythonView<'a>,
    node: &'a crate::scan::NodeInfo,
    java: &'a crate::scan::JavaInfo,
    conflicts: Vec<Ecosystem<'a>>,
    generated_at: String,
}

fn issues(conflicts: &[Conflict]) -> Vec<Issue<'_>> {
    conflicts
        .iter()
        .map(|c| Issue {
            message: &c.message,
            suggestion: c.suggestion.as_deref(),
        })
        .collect()
}

/// Render the report page. Every value is HTML-escaped.
pub fn render_html_report(report: &EnvironmentReport) -> Result<String> {
    let view = ReportView {
        os: report
            .os
            .entries()
            .into_iter()
            .map(|(name, value)| Entry { name, value })
            .collect(),
        python: PythonView {
            version: &report.python.version,
            executable: &report.python.executable,
            package_count: report.python.packages.len(),
        },
        node: &report.node,
        java: &report.java,
        conflicts: report
            .conflicts
            .by_ecosystem()
            .into_iter()
            .map(|(name, conflicts)| Ecosystem {
                name,
                issues: issues(conflicts),
            })
            .collect(),
        generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    };

    render_html(REPORT_HTML, &view)
}
