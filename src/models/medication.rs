//! Medication model representing one entry of the static catalog.

use serde::{Deserialize, Serialize};

/// Indication keywords attached to a medication.
///
/// Keywords are free-text symptom/condition terms ("fever", "pain", ...)
/// matched against the search query by case-insensitive substring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Indications {
    /// Ordered list of indication keywords
    pub keywords: Vec<String>,
}

/// A medication in the static catalog.
///
/// Records are immutable after loading; the search engine only ever reads
/// them and clones matches into result sets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicationRecord {
    /// Unique identifier within the catalog
    pub id: u32,

    /// Display name of the medication
    pub name: String,

    /// Therapeutic category (e.g. "Analgesic"), used for similar-match expansion
    pub category: String,

    /// Indication keywords for symptom search
    #[serde(default)]
    pub indications: Indications,
}

impl MedicationRecord {
    /// Create a record with the given id, name and category and no indications.
    pub fn new(id: u32, name: impl Into<String>, category: impl Into<String>) -> Self {
        MedicationRecord {
            id,
            name: name.into(),
            category: category.into(),
            indications: Indications::default(),
        }
    }

    /// Builder-style helper to attach indication keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indications.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}
