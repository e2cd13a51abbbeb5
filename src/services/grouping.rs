//! Tag-set grouping
//!
//! Partitions a batch of transactions by their exact tag set.

use std::collections::BTreeMap;

use crate::models::{TagSet, Transaction};

/// Transactions keyed by the tag set they share, ordered by tag set
pub type TransactionGroups<'a> = BTreeMap<TagSet, Vec<&'a Transaction>>;

/// Group transactions by tag set
///
/// Every group is non-empty and keeps its members in input order. Untagged
/// transactions share the empty tag set's group. Empty input gives an empty
/// map.
pub fn group_by_tags(transactions: &[Transaction]) -> TransactionGroups<'_> {
    let mut groups = TransactionGroups::new();

    for txn in transactions {
        groups.entry(txn.tags.clone()).or_default().push(txn);
    }

    groups
}
