//! YAML Export functionality

use std::io::Write;

use crate::error::CadenceResult;
use crate::export::json::ReportExport;
use crate::reports::FrequencyReport;

/// Export a frequency report as YAML with a short header comment
pub fn export_report_yaml<W: Write>(report: &FrequencyReport, writer: &mut W) -> CadenceResult<()> {
    let export = ReportExport::new(report);

    writeln!(writer, "# Cadence Frequency Report")?;
    writeln!(writer, "# Generated: {}", export.report.generated_at)?;
    writeln!(writer, "# Bucket table: {}", export.report.bucket_table)?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
