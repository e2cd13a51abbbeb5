//! Transaction model
//!
//! A dated, tagged movement of money. Only the date and tags matter to
//! periodicity detection; id and amount are carried through untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::TransactionId;
use super::money::Money;
use super::tag::{Tag, TagSet};

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique within the current scope
    pub id: TransactionId,

    /// The day the transaction occurred. Ordering of transactions on the same
    /// day is undefined.
    pub date: NaiveDate,

    /// Amount transferred; may be negative, zero or positive
    pub amount: Money,

    /// What the transaction is for
    #[serde(default)]
    pub tags: TagSet,
}

impl Transaction {
    /// Create a transaction
    pub fn new(id: impl Into<TransactionId>, date: NaiveDate, amount: Money, tags: TagSet) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            tags,
        }
    }

    /// Create a transaction with a generated id
    pub fn dated(date: NaiveDate, amount: Money, tags: TagSet) -> Self {
        Self::new(TransactionId::generate(), date, amount, tags)
    }

    /// True if the tag is present on this transaction
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(tag)
    }

    /// True if the transaction carries no tags at all
    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 7, 25).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            "ref-1",
            test_date(),
            Money::from_minor_units(-65000),
            TagSet::from([Tag::Rent, Tag::Charge]),
        );

        assert_eq!(txn.id.as_str(), "ref-1");
        assert!(txn.has_tag(Tag::Rent));
        assert!(txn.has_tag(Tag::Charge));
        assert!(!txn.has_tag(Tag::Cash));
        assert!(!txn.is_untagged());
    }

    #[test]
    fn test_dated_generates_id() {
        let a = Transaction::dated(test_date(), Money::zero(), TagSet::new());
        let b = Transaction::dated(test_date(), Money::zero(), TagSet::new());

        assert_ne!(a.id, b.id);
        assert!(a.is_untagged());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            "ref-2",
            test_date(),
            Money::from_minor_units(1),
            TagSet::from([Tag::Cash]),
        );

        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
