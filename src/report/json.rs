//! JSON report.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{EnvSyncError, Result};
use crate::scan::EnvironmentReport;

/// Serialize a report with four-space indentation.
pub fn render_json(report: &EnvironmentReport) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    report
        .serialize(&mut serializer)
        .map_err(|e| EnvSyncError::Other(e.into()))?;

    String::from_utf8(buf).map_err(|e| EnvSyncError::Other(e.into()))
}
