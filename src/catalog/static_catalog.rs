//! Static medication catalog, embedded or loaded from a JSON file.
//!
//! The catalog is read once at startup and never mutated afterwards. A
//! built-in dataset is compiled into the binary so the CLI and benchmarks
//! work without any external file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::info;

use crate::error::{CatalogError, CatalogResult};
use crate::models::MedicationRecord;

/// JSON source of the built-in catalog.
const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/catalog.json");

/// Built-in catalog, parsed once on first access.
///
/// The embedded JSON is validated by tests; a parse failure here is a broken
/// build, not a runtime condition.
static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let records: Vec<MedicationRecord> =
        serde_json::from_str(BUILTIN_CATALOG_JSON).expect("embedded catalog is valid JSON");
    Catalog::new(records).expect("embedded catalog has unique ids")
});

/// Borrow the built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

/// An immutable, validated collection of medication records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MedicationRecord>,
}

impl Catalog {
    /// Build a catalog from records, rejecting duplicate ids.
    ///
    /// An empty record list is allowed; searching an empty catalog simply
    /// yields empty buckets.
    pub fn new(records: Vec<MedicationRecord>) -> CatalogResult<Self> {
        let mut seen: HashSet<u32> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Catalog { records })
    }

    /// Load a catalog from a JSON file containing an array of records.
    ///
    /// A file that parses to zero records is rejected; pointing the engine at
    /// an empty catalog file is a configuration mistake, not a dataset.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let records: Vec<MedicationRecord> = serde_json::from_str(&contents)?;
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let catalog = Catalog::new(records)?;
        info!(
            path = %path.display(),
            records = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// All records, in catalog order.
    pub fn records(&self) -> &[MedicationRecord] {
        &self.records
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
