//! Frequency report display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BucketTable, Tag};
use crate::reports::{FrequencyReport, FrequencyRow};

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Txns")]
    transaction_count: usize,
    #[tabled(rename = "First")]
    first_date: String,
    #[tabled(rename = "Last")]
    last_date: String,
    #[tabled(rename = "Avg Days")]
    average_days: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Total")]
    total_amount: String,
}

impl From<&FrequencyRow> for DisplayRow {
    fn from(row: &FrequencyRow) -> Self {
        let date = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        Self {
            tags: row.tags.clone(),
            transaction_count: row.transaction_count,
            first_date: date(row.first_date),
            last_date: date(row.last_date),
            average_days: row
                .average_days
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
            period: row.period.to_string(),
            total_amount: row
                .total_amount
                .map(|m| m.to_string())
                .unwrap_or_else(|| "overflow".to_string()),
        }
    }
}

/// Format a frequency report as a terminal table with a summary line
pub fn format_frequency_report(report: &FrequencyReport) -> String {
    if report.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<DisplayRow> = report.rows.iter().map(DisplayRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!(
        "{} transactions in {} groups, {} recurring (bucket table: {})\n",
        report.transaction_count,
        report.rows.len(),
        report.recurring_count(),
        report.bucket_table
    ));
    output
}

/// Format a bucket table, one bucket per line in priority order
pub fn format_bucket_table(table: &BucketTable) -> String {
    let mut output = String::new();
    for bucket in table.buckets() {
        if bucket.range.min_days > bucket.range.max_days {
            output.push_str(&format!("  {:<12} (fallback)\n", bucket.period));
        } else {
            output.push_str(&format!(
                "  {:<12} {:>3} - {:<3} days\n",
                bucket.period, bucket.range.min_days, bucket.range.max_days
            ));
        }
    }
    output
}

/// Format the list of known tags
pub fn format_tag_list() -> String {
    Tag::ALL
        .iter()
        .map(|tag| format!("{}\n", tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BucketTableKind, Money, Period};
    use crate::services::ClassificationRule;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_empty_report() {
        let report = FrequencyReport {
            generated_at: Utc::now(),
            bucket_table: BucketTableKind::Standard,
            transaction_count: 0,
            rows: Vec::new(),
        };
        assert_eq!(format_frequency_report(&report), "No transactions found.\n");
    }

    #[test]
    fn test_report_table() {
        let report = FrequencyReport {
            generated_at: Utc::now(),
            bucket_table: BucketTableKind::Standard,
            transaction_count: 1,
            rows: vec![FrequencyRow {
                tags: "PAYMENT;CASH".into(),
                transaction_count: 1,
                first_date: NaiveDate::from_ymd_opt(2018, 7, 25),
                last_date: NaiveDate::from_ymd_opt(2018, 7, 25),
                months_spanned: 0,
                days_spanned: 0,
                average_days: None,
                period: Period::Unknown,
                rule: ClassificationRule::InsufficientData,
                total_amount: Some(Money::from_minor_units(-2000)),
            }],
        };

        let output = format_frequency_report(&report);
        assert!(output.contains("PAYMENT;CASH"));
        assert!(output.contains("UNKNOWN"));
        assert!(output.contains("-20.00"));
        assert!(
            output.contains("1 transactions in 1 groups, 0 recurring (bucket table: standard)")
        );
    }

    #[test]
    fn test_bucket_table() {
        let output = format_bucket_table(&BucketTable::standard());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("WEEKLY"));
        assert!(lines[2].contains("20 - 28"));
        assert!(lines[4].contains("UNKNOWN") && lines[4].contains("fallback"));
    }

    #[test]
    fn test_tag_list() {
        let output = format_tag_list();
        assert!(output.starts_with("CHARGE\n"));
        assert!(output.contains("HOUSING_BENEFIT\n"));
    }
}
