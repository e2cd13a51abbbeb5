//! User settings for Cadence
//!
//! Selects which bucket table classifies groups, how statement dates are
//! written, and whether groups are classified in parallel.

use serde::{Deserialize, Serialize};

use super::paths::CadencePaths;
use crate::error::CadenceError;
use crate::models::BucketTableKind;

/// User settings for Cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Which FOUR_WEEKLY/MONTHLY boundaries to classify with
    #[serde(default)]
    pub bucket_table: BucketTableKind,

    /// Date format of the first statement field (strftime format)
    #[serde(default = "default_statement_date_format")]
    pub statement_date_format: String,

    /// Classify groups on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_statement_date_format() -> String {
    "%d %b %Y".to_string()
}

fn default_parallel() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bucket_table: BucketTableKind::default(),
            statement_date_format: default_statement_date_format(),
            parallel: default_parallel(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CadencePaths) -> Result<Self, CadenceError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CadenceError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CadenceError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CadencePaths) -> Result<(), CadenceError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CadenceError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
