//! Periodicity classification
//!
//! Derives interval statistics from one group's dates and maps them onto a
//! bucket table. Classification is total: degenerate groups are UNKNOWN.
//!
//! The rules, in order:
//!
//! 1. Fewer than two transactions carry no periodicity information.
//! 2. If the group holds exactly one transaction per calendar month spanned
//!    (`months + 1 == count`), it is MONTHLY. Counting calendar months is
//!    immune to months being 28 to 31 days long.
//! 3. Otherwise the span in days is divided by the transaction count (not
//!    count - 1) and the first matching bucket wins.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::{BucketTable, Period, Transaction};

/// Whole calendar months from `start` to `end`
///
/// A month only counts once the day-of-month of `end` has reached that of
/// `start`: 1 Jan to 1 Feb is one month, 31 Jan to 28 Feb is none. The result
/// is negative when `end` precedes `start` and truncates toward zero.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let packed = |d: NaiveDate| {
        (i64::from(d.year()) * 12 + i64::from(d.month0())) * 32 + i64::from(d.day())
    };
    (packed(end) - packed(start)) / 32
}

/// Interval statistics for one group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntervalStats {
    pub transaction_count: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub months_spanned: i64,
    pub days_spanned: i64,
}

impl IntervalStats {
    /// Compute statistics for dates already sorted ascending
    ///
    /// Returns `None` for an empty slice.
    pub fn from_sorted_dates(dates: &[NaiveDate]) -> Option<Self> {
        let first_date = *dates.first()?;
        let last_date = *dates.last()?;

        Some(Self {
            transaction_count: dates.len(),
            first_date,
            last_date,
            months_spanned: whole_months_between(first_date, last_date),
            days_spanned: (last_date - first_date).num_days(),
        })
    }

    /// Span in days divided by the transaction count (integer division)
    pub fn average_days_per_interval(&self) -> i64 {
        // transaction_count is never zero: construction needs a first date
        self.days_spanned / self.transaction_count as i64
    }

    /// True when there is exactly one transaction per calendar month spanned
    pub fn is_one_per_calendar_month(&self) -> bool {
        self.months_spanned + 1 == self.transaction_count as i64
    }
}

/// Which rule decided a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationRule {
    /// Fewer than two transactions
    InsufficientData,
    /// One transaction per calendar month spanned
    CalendarMonths,
    /// Average days per interval matched against the bucket table
    AverageDays,
}

/// The outcome of classifying one group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub period: Period,
    pub rule: ClassificationRule,
    /// Absent only for an empty group
    pub stats: Option<IntervalStats>,
}

/// Classifies groups of transactions against a bucket table
#[derive(Debug, Clone, Default)]
pub struct PeriodClassifier {
    table: BucketTable,
}

impl PeriodClassifier {
    /// Create a classifier using the given table
    pub fn new(table: BucketTable) -> Self {
        Self { table }
    }

    /// Create a classifier using the table selected in settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(BucketTable::for_kind(settings.bucket_table))
    }

    /// The bucket table in use
    pub fn table(&self) -> &BucketTable {
        &self.table
    }

    /// Classify one group
    pub fn classify(&self, group: &[&Transaction]) -> Period {
        self.classify_detailed(group).period
    }

    /// Classify one group, keeping the statistics and the deciding rule
    pub fn classify_detailed(&self, group: &[&Transaction]) -> Classification {
        // Stable sort: same-day order stays as given and cannot affect the result
        let mut sorted: Vec<&Transaction> = group.to_vec();
        sorted.sort_by_key(|txn| txn.date);
        let dates: Vec<NaiveDate> = sorted.iter().map(|txn| txn.date).collect();

        self.classify_sorted_dates(&dates)
    }

    /// Classify dates already sorted ascending
    pub fn classify_sorted_dates(&self, dates: &[NaiveDate]) -> Classification {
        let stats = IntervalStats::from_sorted_dates(dates);

        let (period, rule) = match &stats {
            Some(s) if s.transaction_count >= 2 => {
                if s.is_one_per_calendar_month() {
                    (Period::Monthly, ClassificationRule::CalendarMonths)
                } else {
                    (
                        self.table.match_average(s.average_days_per_interval()),
                        ClassificationRule::AverageDays,
                    )
                }
            }
            _ => (Period::Unknown, ClassificationRule::InsufficientData),
        };

        Classification {
            period,
            rule,
            stats,
        }
    }
}
