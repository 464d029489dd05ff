// src/config.rs

//! Defines the configuration structures for `color-map`.
//!
//! Only ambient concerns live here. The color tables themselves are fixed
//! constants in `crate::color_data` and are not configurable. The process-wide
//! `CONFIG` is built lazily from compiled-in defaults; nothing is read from
//! disk or from the command line.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Process-wide configuration, initialised on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Represents the complete configuration for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Logging-related settings.
    pub logging: LoggingConfig,
}

// --- Logging Configuration ---

/// Settings for the `env_logger` backend.
///
/// Log records go to standard error, so none of these settings can alter the
/// color map written to standard output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "warn", "debug").
    pub default_filter: String,
    /// Prefix each record with a microsecond timestamp.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_filter: "warn".to_string(),
            timestamps: true,
        }
    }
}
