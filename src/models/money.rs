//! Money type for transaction amounts
//!
//! Amounts are stored in minor currency units (pence, cents) as `i64`.
//! Classification never looks at them; they are carried through so reports
//! can total each group.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed monetary amount in minor currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use cadence::models::Money;
    /// let amount = Money::from_minor_units(1050); // 10.50
    /// ```
    pub const fn from_minor_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Get the whole major units (truncated toward zero)
    pub const fn major_part(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, or `None` if the result does not fit in `i64`
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Total a sequence of amounts, or `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| total.checked_add(amount))
    }

    /// Parse a statement amount such as `"-650.00"`
    ///
    /// The decimal separator is dropped and the remaining digits are read as
    /// minor units, so `"12.34"` is 1234 and `"12.5"` is 125. Statements always
    /// write two decimal places; the literal removal is kept for fidelity with
    /// the exporters that produce them.
    pub fn parse_statement(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let digits = trimmed.replace('.', "");
        digits
            .parse::<i64>()
            .map(Self)
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major_part().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major_part(), self.minor_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let m = Money::from_minor_units(1050);
        assert_eq!(m.minor_units(), 1050);
        assert_eq!(m.major_part(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor_units(1050)), "10.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{}", Money::from_minor_units(-65000)), "-650.00");
        assert_eq!(format!("{}", Money::from_minor_units(-5)), "-0.05");
    }

    #[test]
    fn test_parse_statement() {
        assert_eq!(Money::parse_statement("-650.00").unwrap().minor_units(), -65000);
        assert_eq!(Money::parse_statement(" 12.34 ").unwrap().minor_units(), 1234);
        assert_eq!(Money::parse_statement("12.5").unwrap().minor_units(), 125);
        assert_eq!(Money::parse_statement("7").unwrap().minor_units(), 7);
    }

    #[test]
    fn test_parse_statement_rejects_garbage() {
        assert!(Money::parse_statement("").is_err());
        assert!(Money::parse_statement("12,50").is_err());
        assert!(Money::parse_statement("ten").is_err());
    }

    #[test]
    fn test_checked_sum() {
        let total = Money::checked_sum([100, -250, 300].into_iter().map(Money::from_minor_units));
        assert_eq!(total, Some(Money::from_minor_units(150)));
        assert_eq!(Money::checked_sum(Vec::<Money>::new()), Some(Money::zero()));
    }

    #[test]
    fn test_checked_sum_overflow() {
        let max = Money::from_minor_units(i64::MAX);
        assert_eq!(max.checked_add(Money::from_minor_units(1)), None);
        assert_eq!(Money::checked_sum([max, max]), None);
        assert_eq!(
            Money::checked_sum([max, Money::from_minor_units(-1), Money::from_minor_units(1)]),
            Some(max)
        );
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor_units(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");
    }
}
