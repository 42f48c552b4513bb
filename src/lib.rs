//! Medsearch - in-memory medication catalog search with conflict detection.
//!
//! This library implements the search behind a medication lookup screen: it
//! filters a static catalog by name or symptom keyword and cross-references
//! the query against the user's tracked medications to flag potential
//! adverse-reaction conflicts.
//!
//! # Architecture
//!
//! - **models**: Medication records, user drug entries, and result types
//! - **matching**: Query normalization and case-folded comparison
//! - **search**: The three-bucket search engine and conflict detection
//! - **catalog**: Built-in and file-loaded medication catalogs
//! - **providers**: Trait seams for catalog and user-panel suppliers
//! - **config**: Environment-based configuration for the CLI
//! - **error**: Custom error types for catalog loading and configuration

pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod models;
pub mod providers;
pub mod search;

pub use catalog::{builtin_catalog, Catalog};
pub use config::Config;
pub use error::{CatalogError, CatalogResult, ConfigError, ConfigResult};
pub use models::{
    AdverseReactions, ConflictAlert, Indications, MedicationRecord, SearchOutcome,
    SearchResultSet, UserDrugEntry,
};
pub use providers::{CatalogProvider, InMemoryPanel, StaticCatalogProvider, UserPanelProvider};
pub use search::SearchEngine;
