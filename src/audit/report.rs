use std::fs;
use std::path::Path;

use crate::audit::models::AuditReport;
use crate::errors::Result;

/// Serialize the report as pretty JSON
pub fn report_to_json(report: &AuditReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the report as JSON to `path`, replacing any existing file
pub fn write_report(report: &AuditReport, path: &Path) -> Result<()> {
    let json = report_to_json(report)?;
    fs::write(path, json)?;
    Ok(())
}
