//! Cadence - detects how often tagged transactions recur
//!
//! Given dated, tagged transactions, Cadence groups them by their exact tag
//! set and classifies each group as weekly, fortnightly, four-weekly, monthly
//! or unknown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transactions, tags, periods and bucket tables
//! - `services`: Grouping, classification and the frequency service
//! - `import`: Statement file loading
//! - `reports`: Per-group frequency reports
//! - `export`: CSV, JSON and YAML report export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `cadence` binary
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use cadence::models::{Money, Period, Tag, TagSet, Transaction};
//! use cadence::services::FrequencyService;
//! use chrono::NaiveDate;
//!
//! let rent = TagSet::from([Tag::Rent, Tag::Charge]);
//! let transactions: Vec<Transaction> = (1..=3)
//!     .map(|month| {
//!         Transaction::dated(
//!             NaiveDate::from_ymd_opt(2018, month, 1).unwrap(),
//!             Money::from_minor_units(-65000),
//!             rent.clone(),
//!         )
//!     })
//!     .collect();
//!
//! let periods = FrequencyService::default().detect(&transactions);
//! assert_eq!(periods[&rent], Period::Monthly);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod import;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{CadenceError, CadenceResult};
