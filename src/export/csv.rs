//! CSV Export functionality

use std::io::Write;

use serde::Serialize;

use crate::error::CadenceResult;
use crate::reports::{FrequencyReport, FrequencyRow};

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Tags")]
    tags: &'a str,
    #[serde(rename = "Transactions")]
    transaction_count: usize,
    #[serde(rename = "First Date")]
    first_date: String,
    #[serde(rename = "Last Date")]
    last_date: String,
    #[serde(rename = "Months")]
    months_spanned: i64,
    #[serde(rename = "Days")]
    days_spanned: i64,
    #[serde(rename = "Average Days")]
    average_days: Option<i64>,
    #[serde(rename = "Period")]
    period: &'static str,
    #[serde(rename = "Total")]
    total_amount: Option<String>,
}

impl<'a> From<&'a FrequencyRow> for CsvRow<'a> {
    fn from(row: &'a FrequencyRow) -> Self {
        let date = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };

        Self {
            tags: &row.tags,
            transaction_count: row.transaction_count,
            first_date: date(row.first_date),
            last_date: date(row.last_date),
            months_spanned: row.months_spanned,
            days_spanned: row.days_spanned,
            average_days: row.average_days,
            period: row.period.name(),
            total_amount: row.total_amount.map(|m| m.to_string()),
        }
    }
}

/// Export a frequency report as CSV, one line per group
pub fn export_report_csv<W: Write>(report: &FrequencyReport, writer: &mut W) -> CadenceResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for row in &report.rows {
        csv_writer.serialize(CsvRow::from(row))?;
    }
    csv_writer.flush()?;

    Ok(())
}
