//! Recurrence periods and the bucket tables that define them
//!
//! A bucket pairs a [`Period`] with an inclusive range of average days between
//! transactions. Tables are scanned in declaration order and the first range
//! containing the average wins, so overlapping ranges are resolved by priority
//! rather than by closeness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a group of transactions recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Period {
    Weekly,
    Fortnightly,
    FourWeekly,
    Monthly,
    Unknown,
}

impl Period {
    /// Every period, in matching priority order
    pub const ALL: [Period; 5] = [
        Period::Weekly,
        Period::Fortnightly,
        Period::FourWeekly,
        Period::Monthly,
        Period::Unknown,
    ];

    /// The upper-snake name used in reports
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Fortnightly => "FORTNIGHTLY",
            Self::FourWeekly => "FOUR_WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Check if a recurrence was detected
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Inclusive range of average days between transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub min_days: i64,
    pub max_days: i64,
}

impl PeriodRange {
    /// Create a range covering `min_days..=max_days`
    pub const fn new(min_days: i64, max_days: i64) -> Self {
        Self { min_days, max_days }
    }

    /// A range no value can fall into (minimum above maximum)
    pub const fn never() -> Self {
        Self {
            min_days: i64::MAX,
            max_days: i64::MIN,
        }
    }

    /// Check if an average falls inside the range (both ends inclusive)
    pub fn contains(&self, average_days: i64) -> bool {
        average_days >= self.min_days && average_days <= self.max_days
    }
}

/// One row of a bucket table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub period: Period,
    pub range: PeriodRange,
}

/// Which published set of FOUR_WEEKLY/MONTHLY boundaries to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BucketTableKind {
    /// FOUR_WEEKLY 20-28, MONTHLY 28-35
    #[default]
    Standard,
    /// FOUR_WEEKLY 20-36, MONTHLY 25-35
    Extended,
}

impl fmt::Display for BucketTableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for BucketTableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!(
                "Unknown bucket table '{}'. Use 'standard' or 'extended'",
                other
            )),
        }
    }
}

/// Ordered list of buckets, scanned first-match-wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTable {
    buckets: Vec<Bucket>,
}

impl BucketTable {
    /// Build a table from buckets in priority order
    pub fn new(buckets: Vec<Bucket>) -> Self {
        Self { buckets }
    }

    /// Build the table for a named boundary set
    pub fn for_kind(kind: BucketTableKind) -> Self {
        match kind {
            BucketTableKind::Standard => Self::standard(),
            BucketTableKind::Extended => Self::extended(),
        }
    }

    /// WEEKLY 5-9, FORTNIGHTLY 10-19, FOUR_WEEKLY 20-28, MONTHLY 28-35
    ///
    /// An average of exactly 28 days is FOUR_WEEKLY: it is declared first.
    pub fn standard() -> Self {
        Self::with_four_weekly_and_monthly(PeriodRange::new(20, 28), PeriodRange::new(28, 35))
    }

    /// WEEKLY 5-9, FORTNIGHTLY 10-19, FOUR_WEEKLY 20-36, MONTHLY 25-35
    ///
    /// FOUR_WEEKLY shadows MONTHLY's whole range here, so MONTHLY is only
    /// reachable through the calendar-month rule.
    pub fn extended() -> Self {
        Self::with_four_weekly_and_monthly(PeriodRange::new(20, 36), PeriodRange::new(25, 35))
    }

    fn with_four_weekly_and_monthly(four_weekly: PeriodRange, monthly: PeriodRange) -> Self {
        Self::new(vec![
            Bucket {
                period: Period::Weekly,
                range: PeriodRange::new(5, 9),
            },
            Bucket {
                period: Period::Fortnightly,
                range: PeriodRange::new(10, 19),
            },
            Bucket {
                period: Period::FourWeekly,
                range: four_weekly,
            },
            Bucket {
                period: Period::Monthly,
                range: monthly,
            },
            Bucket {
                period: Period::Unknown,
                range: PeriodRange::never(),
            },
        ])
    }

    /// Buckets in priority order
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Find the first bucket whose range contains the average, or UNKNOWN
    pub fn match_average(&self, average_days: i64) -> Period {
        self.buckets
            .iter()
            .find(|bucket| bucket.range.contains(average_days))
            .map(|bucket| bucket.period)
            .unwrap_or(Period::Unknown)
    }
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_is_inclusive() {
        let range = PeriodRange::new(5, 9);
        assert!(!range.contains(4));
        assert!(range.contains(5));
        assert!(range.contains(9));
        assert!(!range.contains(10));
    }

    #[test]
    fn test_sentinel_never_matches() {
        let never = PeriodRange::never();
        for value in [i64::MIN, -1, 0, 28, i64::MAX] {
            assert!(!never.contains(value));
        }
    }

    #[test]
    fn test_standard_table_boundaries() {
        let table = BucketTable::standard();
        assert_eq!(table.match_average(4), Period::Unknown);
        assert_eq!(table.match_average(5), Period::Weekly);
        assert_eq!(table.match_average(9), Period::Weekly);
        assert_eq!(table.match_average(10), Period::Fortnightly);
        assert_eq!(table.match_average(19), Period::Fortnightly);
        assert_eq!(table.match_average(20), Period::FourWeekly);
        assert_eq!(table.match_average(28), Period::FourWeekly);
        assert_eq!(table.match_average(29), Period::Monthly);
        assert_eq!(table.match_average(35), Period::Monthly);
        assert_eq!(table.match_average(36), Period::Unknown);
    }

    #[test]
    fn test_extended_table_boundaries() {
        let table = BucketTable::extended();
        assert_eq!(table.match_average(25), Period::FourWeekly);
        assert_eq!(table.match_average(30), Period::FourWeekly);
        assert_eq!(table.match_average(36), Period::FourWeekly);
        assert_eq!(table.match_average(37), Period::Unknown);
    }

    #[test]
    fn test_priority_order_wins_over_closeness() {
        let table = BucketTable::new(vec![
            Bucket {
                period: Period::Monthly,
                range: PeriodRange::new(0, 100),
            },
            Bucket {
                period: Period::Weekly,
                range: PeriodRange::new(7, 7),
            },
        ]);
        assert_eq!(table.match_average(7), Period::Monthly);
    }

    #[test]
    fn test_empty_table_falls_back_to_unknown() {
        let table = BucketTable::new(Vec::new());
        assert_eq!(table.match_average(7), Period::Unknown);
    }

    #[test]
    fn test_table_order_matches_period_order() {
        let periods: Vec<Period> = BucketTable::standard()
            .buckets()
            .iter()
            .map(|b| b.period)
            .collect();
        assert_eq!(periods, Period::ALL.to_vec());
    }

    #[test]
    fn test_kind_parse_and_display() {
        assert_eq!("Extended".parse::<BucketTableKind>().unwrap(), BucketTableKind::Extended);
        assert_eq!(BucketTableKind::Standard.to_string(), "standard");
        assert!("loose".parse::<BucketTableKind>().is_err());
        assert_eq!(BucketTable::for_kind(BucketTableKind::Extended), BucketTable::extended());
    }

    #[test]
    fn test_period_serialization() {
        let json = serde_json::to_string(&Period::FourWeekly).unwrap();
        assert_eq!(json, r#""FOUR_WEEKLY""#);
        assert!(!Period::Unknown.is_known());
        assert!(Period::Monthly.is_known());
    }
}
