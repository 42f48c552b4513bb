//! Seams for the engine's external collaborators.
//!
//! The engine itself only sees plain slices; these traits are the boundary
//! the binary and tests compose against, enabling different backings
//! (built-in catalog, file-loaded catalog, mock panel).

use crate::catalog::Catalog;
use crate::models::{MedicationRecord, UserDrugEntry};

/// Supplier of the static medication catalog, loaded once at startup.
pub trait CatalogProvider: Send + Sync {
    /// All catalog records, in catalog order.
    fn records(&self) -> &[MedicationRecord];
}

/// Supplier of the user's current drug panel.
///
/// The panel may change between search invocations, so implementations
/// return a fresh snapshot per call.
pub trait UserPanelProvider: Send + Sync {
    /// The drugs currently on the user's panel, in panel order.
    fn user_drugs(&self) -> Vec<UserDrugEntry>;
}

/// Catalog provider backed by a loaded [`Catalog`].
pub struct StaticCatalogProvider {
    catalog: Catalog,
}

impl StaticCatalogProvider {
    /// Wrap an already-loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        StaticCatalogProvider { catalog }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn records(&self) -> &[MedicationRecord] {
        self.catalog.records()
    }
}

/// In-memory user panel.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPanel {
    drugs: Vec<UserDrugEntry>,
}

impl InMemoryPanel {
    /// Create a panel with the given entries.
    pub fn new(drugs: Vec<UserDrugEntry>) -> Self {
        InMemoryPanel { drugs }
    }

    /// Append a drug to the panel.
    pub fn add(&mut self, drug: UserDrugEntry) {
        self.drugs.push(drug);
    }
}

impl UserPanelProvider for InMemoryPanel {
    fn user_drugs(&self) -> Vec<UserDrugEntry> {
        self.drugs.clone()
    }
}
