//! Path management for Cadence
//!
//! ## Path Resolution Order
//!
//! 1. `CADENCE_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/cadence` or `~/.config/cadence`
//! 3. Windows: `%APPDATA%\cadence`

use std::path::PathBuf;

use crate::error::CadenceError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "CADENCE_CONFIG_DIR";

/// Manages all paths used by Cadence
#[derive(Debug, Clone)]
pub struct CadencePaths {
    base_dir: PathBuf,
}

impl CadencePaths {
    /// Create a new CadencePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CadenceError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CadencePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/cadence/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CadenceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CadenceError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CadenceError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                CadenceError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("cadence"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CadenceError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CadenceError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("cadence"))
}
