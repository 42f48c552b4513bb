//! Error types for the medication search crate.
//!
//! This module defines custom error types using `thiserror`. Searching itself
//! never fails: empty or malformed queries are a no-match condition, so only
//! catalog loading and configuration have error kinds.

use thiserror::Error;

/// Errors that can occur while loading a medication catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate medication id {0} in catalog")]
    DuplicateId(u32),

    /// Catalog file parsed to zero records
    #[error("Catalog is empty")]
    Empty,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
