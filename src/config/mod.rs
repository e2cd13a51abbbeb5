//! Configuration module for Cadence
//!
//! This module provides configuration management including:
//! - Config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CadencePaths;
pub use settings::Settings;
