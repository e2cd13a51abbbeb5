//! Display formatting for terminal output

pub mod frequency;

pub use frequency::{format_bucket_table, format_frequency_report, format_tag_list};
