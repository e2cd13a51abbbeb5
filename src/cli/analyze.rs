//! CLI command for statement analysis
//!
//! Loads a statement, classifies every tag-set group, and writes the report
//! to stdout or a file in the chosen format.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use tracing::info;

use crate::config::Settings;
use crate::display::format_frequency_report;
use crate::error::{CadenceError, CadenceResult};
use crate::export::{export_report_csv, export_report_json, export_report_yaml};
use crate::import::StatementLoader;
use crate::models::{BucketTable, BucketTableKind};
use crate::reports::FrequencyReport;
use crate::services::{FrequencyService, PeriodClassifier};

/// Output format for the frequency report
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Terminal table
    #[default]
    Table,
    /// One CSV row per group
    Csv,
    /// Full report as JSON
    Json,
    /// Full report as YAML
    Yaml,
}

/// Arguments for `cadence analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the statement file
    pub file: PathBuf,

    /// Bucket table: "standard" or "extended" (defaults to the configured one)
    #[arg(short, long)]
    pub table: Option<BucketTableKind>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Statement date format (strftime), e.g. "%Y-%m-%d"
    #[arg(long)]
    pub date_format: Option<String>,

    /// Classify groups on a single thread
    #[arg(long)]
    pub sequential: bool,
}

/// Handle the analyze command
pub fn handle_analyze_command(settings: &Settings, args: AnalyzeArgs) -> CadenceResult<()> {
    let table_kind = args.table.unwrap_or(settings.bucket_table);

    let loader = match &args.date_format {
        Some(format) => StatementLoader::new(format.clone()),
        None => StatementLoader::from_settings(settings),
    };
    let transactions = loader.load_path(&args.file)?;

    let service = FrequencyService::new(PeriodClassifier::new(BucketTable::for_kind(table_kind)))
        .with_parallel(settings.parallel && !args.sequential);
    let report = FrequencyReport::generate(&service, table_kind, &transactions);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CadenceError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    write_report(&report, args.format, &mut writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        info!(path = %path.display(), format = ?args.format, "Report written");
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Write a report in the given format
pub fn write_report<W: Write>(
    report: &FrequencyReport,
    format: OutputFormat,
    writer: &mut W,
) -> CadenceResult<()> {
    match format {
        OutputFormat::Table => {
            write!(writer, "{}", format_frequency_report(report))?;
            Ok(())
        }
        OutputFormat::Csv => export_report_csv(report, writer),
        OutputFormat::Json => export_report_json(report, writer),
        OutputFormat::Yaml => export_report_yaml(report, writer),
    }
}
