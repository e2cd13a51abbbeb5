//! Reports module for Cadence
//!
//! Turns frequency analysis into per-group rows for display and export.

pub mod frequency;

pub use frequency::{FrequencyReport, FrequencyRow};
