//! Core data models for Cadence
//!
//! Transactions, their tags, and the recurrence periods they are classified
//! into.

pub mod ids;
pub mod money;
pub mod period;
pub mod tag;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use period::{Bucket, BucketTable, BucketTableKind, Period, PeriodRange};
pub use tag::{Tag, TagParseError, TagSet};
pub use transaction::Transaction;
