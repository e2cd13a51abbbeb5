//! Service layer for Cadence
//!
//! Grouping and classification are pure functions over a batch of
//! transactions; `FrequencyService` ties them together.

pub mod classification;
pub mod frequency;
pub mod grouping;

pub use classification::{
    whole_months_between, Classification, ClassificationRule, IntervalStats, PeriodClassifier,
};
pub use frequency::{FrequencyService, GroupAnalysis};
pub use grouping::{group_by_tags, TransactionGroups};
