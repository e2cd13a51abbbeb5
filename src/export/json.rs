//! JSON Export functionality
//!
//! Wraps the report with a schema version and the exporting app version.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::CadenceResult;
use crate::reports::FrequencyReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A report as written to JSON or YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Application version that created the export
    pub app_version: String,

    /// The report itself
    #[serde(flatten)]
    pub report: FrequencyReport,
}

impl ReportExport {
    /// Wrap a report for export
    pub fn new(report: &FrequencyReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report: report.clone(),
        }
    }
}

/// Export a frequency report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &FrequencyReport, writer: &mut W) -> CadenceResult<()> {
    let export = ReportExport::new(report);

    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;

    Ok(())
}
