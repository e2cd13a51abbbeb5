//! Export module for Cadence
//!
//! Writes frequency reports in several formats:
//! - CSV: one row per tag-set group (spreadsheet-compatible)
//! - JSON: the full report, machine-readable
//! - YAML: the full report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;
