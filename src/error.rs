//! Custom error types for Cadence
//!
//! Grouping and classification never fail; every error here comes from the
//! layers around them (statement loading, settings, report export).

use thiserror::Error;

/// The main error type for Cadence operations
#[derive(Error, Debug)]
pub enum CadenceError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// A statement line could not be turned into a transaction
    #[error("Import error on line {line}: {reason}")]
    Import { line: usize, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CadenceError {
    /// Create an import error for a 1-based statement line
    pub fn import(line: usize, reason: impl Into<String>) -> Self {
        Self::Import {
            line,
            reason: reason.into(),
        }
    }

    /// Check if this is an import error
    pub fn is_import(&self) -> bool {
        matches!(self, Self::Import { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CadenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CadenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for CadenceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for CadenceError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Cadence operations
pub type CadenceResult<T> = Result<T, CadenceError>;
