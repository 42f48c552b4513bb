//! Configuration management for the medsearch CLI.
//!
//! This module handles loading configuration from environment variables,
//! with optional `.env` support via dotenvy.

use std::env;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Log levels understood by the tracing filter.
const KNOWN_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Configuration for the medsearch CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to an external catalog JSON file; `None` uses the built-in catalog
    pub catalog_path: Option<PathBuf>,

    /// Path to a user panel JSON file; `None` means an empty panel
    pub panel_path: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MEDSEARCH_CATALOG_PATH`: external catalog JSON file
    /// - `MEDSEARCH_PANEL_PATH`: user panel JSON file
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent
        let _ = dotenvy::dotenv();

        let catalog_path = env::var("MEDSEARCH_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let panel_path = env::var("MEDSEARCH_PANEL_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "error".to_string())
            .to_lowercase();

        if !KNOWN_LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {:?}, got: {}", KNOWN_LOG_LEVELS, log_level),
            });
        }

        Ok(Config {
            catalog_path,
            panel_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            catalog_path: None,
            panel_path: None,
            log_level: "error".to_string(),
        }
    }
}
