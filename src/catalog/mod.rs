//! Medication catalog loading.

mod static_catalog;

pub use static_catalog::{builtin_catalog, Catalog};
