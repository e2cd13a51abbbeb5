//! Frequency Report
//!
//! One row per tag-set group: the interval statistics behind its
//! classification and the period it was assigned.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BucketTableKind, Money, Period, Transaction};
use crate::services::{ClassificationRule, FrequencyService, GroupAnalysis};

/// A single group in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyRow {
    /// Tag set, `;`-joined
    pub tags: String,
    /// Number of transactions in the group
    pub transaction_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Whole calendar months from first to last transaction
    pub months_spanned: i64,
    /// Whole days from first to last transaction
    pub days_spanned: i64,
    /// Days spanned divided by transaction count; absent for single transactions
    pub average_days: Option<i64>,
    pub period: Period,
    /// Which rule decided the period
    pub rule: ClassificationRule,
    /// Sum of the group's amounts; absent if it overflows
    pub total_amount: Option<Money>,
}

impl From<&GroupAnalysis> for FrequencyRow {
    fn from(analysis: &GroupAnalysis) -> Self {
        let stats = analysis.classification.stats;
        let average_days = stats
            .filter(|s| s.transaction_count >= 2)
            .map(|s| s.average_days_per_interval());

        Self {
            tags: analysis.tags.to_string(),
            transaction_count: stats.map(|s| s.transaction_count).unwrap_or(0),
            first_date: stats.map(|s| s.first_date),
            last_date: stats.map(|s| s.last_date),
            months_spanned: stats.map(|s| s.months_spanned).unwrap_or(0),
            days_spanned: stats.map(|s| s.days_spanned).unwrap_or(0),
            average_days,
            period: analysis.period(),
            rule: analysis.classification.rule,
            total_amount: analysis.total_amount,
        }
    }
}

/// Frequency Report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Bucket table used for day-average matching
    pub bucket_table: BucketTableKind,
    /// Total transactions analyzed
    pub transaction_count: usize,
    /// One row per tag set, ordered by tag set
    pub rows: Vec<FrequencyRow>,
}

impl FrequencyReport {
    /// Generate a report for a batch of transactions
    pub fn generate(
        service: &FrequencyService,
        bucket_table: BucketTableKind,
        transactions: &[Transaction],
    ) -> Self {
        let rows = service
            .analyze(transactions)
            .iter()
            .map(FrequencyRow::from)
            .collect();

        Self {
            generated_at: Utc::now(),
            bucket_table,
            transaction_count: transactions.len(),
            rows,
        }
    }

    /// Number of groups with a detected recurrence
    pub fn recurring_count(&self) -> usize {
        self.rows.iter().filter(|r| r.period.is_known()).count()
    }

    /// Look up the row for a tag set by its display form (e.g. `CHARGE;RENT`)
    pub fn row(&self, tags: &str) -> Option<&FrequencyRow> {
        self.rows.iter().find(|r| r.tags == tags)
    }

    /// Check if the report has no groups
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tag, TagSet};

    fn batch() -> Vec<Transaction> {
        let weekly = TagSet::from([Tag::Payment, Tag::Cash]);
        let single = TagSet::from([Tag::Fee]);

        let mut transactions: Vec<Transaction> =
            ["2018-01-01", "2018-01-09", "2018-01-15", "2018-01-21", "2018-01-30"]
                .iter()
                .map(|d| {
                    Transaction::dated(
                        NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
                        Money::from_minor_units(-2000),
                        weekly.clone(),
                    )
                })
                .collect();
        transactions.push(Transaction::dated(
            NaiveDate::from_ymd_opt(2018, 7, 25).unwrap(),
            Money::from_minor_units(-150),
            single,
        ));
        transactions
    }

    #[test]
    fn test_generate_rows() {
        let report = FrequencyReport::generate(
            &FrequencyService::default(),
            BucketTableKind::Standard,
            &batch(),
        );

        assert_eq!(report.transaction_count, 6);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.recurring_count(), 1);

        let weekly = report.row("PAYMENT;CASH").unwrap();
        assert_eq!(weekly.period, Period::Weekly);
        assert_eq!(weekly.rule, ClassificationRule::AverageDays);
        assert_eq!(weekly.days_spanned, 29);
        assert_eq!(weekly.average_days, Some(5));
        assert_eq!(weekly.total_amount, Some(Money::from_minor_units(-10000)));
    }

    #[test]
    fn test_single_transaction_row() {
        let report = FrequencyReport::generate(
            &FrequencyService::default(),
            BucketTableKind::Standard,
            &batch(),
        );

        let fee = report.row("FEE").unwrap();
        assert_eq!(fee.period, Period::Unknown);
        assert_eq!(fee.rule, ClassificationRule::InsufficientData);
        assert_eq!(fee.transaction_count, 1);
        assert_eq!(fee.average_days, None);
        assert_eq!(fee.first_date, fee.last_date);
    }

    #[test]
    fn test_overflowing_total_keeps_classification() {
        let tags = TagSet::from([Tag::Rent]);
        let transactions: Vec<Transaction> = [1, 2]
            .iter()
            .map(|&m| {
                Transaction::dated(
                    NaiveDate::from_ymd_opt(2018, m, 1).unwrap(),
                    Money::from_minor_units(i64::MAX),
                    tags.clone(),
                )
            })
            .collect();

        let report = FrequencyReport::generate(
            &FrequencyService::default(),
            BucketTableKind::Standard,
            &transactions,
        );

        let rent = report.row("RENT").unwrap();
        assert_eq!(rent.period, Period::Monthly);
        assert_eq!(rent.total_amount, None);
    }

    #[test]
    fn test_empty_report() {
        let report =
            FrequencyReport::generate(&FrequencyService::default(), BucketTableKind::Standard, &[]);
        assert!(report.is_empty());
        assert_eq!(report.recurring_count(), 0);
    }
}
