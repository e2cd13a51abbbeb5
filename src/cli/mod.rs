//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analyze;

pub use analyze::{handle_analyze_command, write_report, AnalyzeArgs, OutputFormat};
