//! Transaction tags and tag sets
//!
//! A tag marks what a transaction is for. Transactions are grouped by their
//! full tag set, so [`TagSet`] compares and hashes by content: the same tags
//! discovered in any order produce the same key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A category marker attached to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    Charge,
    Rent,
    Payment,
    Cash,
    HousingBenefit,
    Salary,
    Utilities,
    Groceries,
    Transfer,
    Fee,
}

impl Tag {
    /// Every tag, in declaration order
    pub const ALL: [Tag; 10] = [
        Tag::Charge,
        Tag::Rent,
        Tag::Payment,
        Tag::Cash,
        Tag::HousingBenefit,
        Tag::Salary,
        Tag::Utilities,
        Tag::Groceries,
        Tag::Transfer,
        Tag::Fee,
    ];

    /// The canonical upper-snake name, as written in statements
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Charge => "CHARGE",
            Self::Rent => "RENT",
            Self::Payment => "PAYMENT",
            Self::Cash => "CASH",
            Self::HousingBenefit => "HOUSING_BENEFIT",
            Self::Salary => "SALARY",
            Self::Utilities => "UTILITIES",
            Self::Groceries => "GROCERIES",
            Self::Transfer => "TRANSFER",
            Self::Fee => "FEE",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Tag {
    type Err = TagParseError;

    /// Case-insensitive; `-` and spaces stand in for `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == normalized)
            .ok_or_else(|| TagParseError::Unknown(s.trim().to_string()))
    }
}

/// Error type for tag parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagParseError {
    Unknown(String),
}

impl fmt::Display for TagParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagParseError::Unknown(s) => write!(f, "Unknown tag: '{}'", s),
        }
    }
}

impl std::error::Error for TagParseError {}

/// An unordered, duplicate-free collection of tags
///
/// Backed by a `BTreeSet`, so iteration order, equality, ordering and hashing
/// all depend only on which tags are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag; returns false if it was already present
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    /// Check whether a tag is present
    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for untagged transactions
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(untagged)");
        }
        let names: Vec<&str> = self.iter().map(|t| t.name()).collect();
        f.write_str(&names.join(";"))
    }
}

impl FromStr for TagSet {
    type Err = TagParseError;

    /// Parse a `;`-separated tag list; a blank string is the empty set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Tag::from_str)
            .collect()
    }
}
