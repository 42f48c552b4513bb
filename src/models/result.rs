//! Result types produced by a catalog search.

use serde::{Deserialize, Serialize};

use crate::models::MedicationRecord;

/// The three result buckets of one search, rebuilt on every query.
///
/// Within a bucket, records keep their catalog order. `similar` is always
/// disjoint from `exact` by id and never contains duplicate ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchResultSet {
    /// Records whose name equals the query exactly (case-insensitive)
    pub exact: Vec<MedicationRecord>,

    /// Same-category and partial-name matches, excluding exact matches
    pub similar: Vec<MedicationRecord>,

    /// Records with an indication keyword containing the query
    pub for_symptom: Vec<MedicationRecord>,
}

impl SearchResultSet {
    /// True when all three buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.similar.is_empty() && self.for_symptom.is_empty()
    }

    /// Total number of records across all buckets.
    pub fn len(&self) -> usize {
        self.exact.len() + self.similar.len() + self.for_symptom.len()
    }
}

/// Warning raised when the queried symptom is a known adverse reaction of a
/// medication the user already tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConflictAlert {
    /// Names of the user drugs whose adverse reactions matched, in panel order
    pub drug_names: Vec<String>,

    /// User-facing alert message
    pub message: String,
}

impl ConflictAlert {
    /// Build an alert for the given query and matching drug names.
    ///
    /// `drug_names` must be non-empty; callers only construct an alert after
    /// at least one user drug matched.
    pub fn new(query: &str, drug_names: Vec<String>) -> Self {
        let message = format!(
            "Atenção: \"{}\" pode ser um efeito colateral de: {}.",
            query.trim(),
            drug_names.join(", ")
        );
        ConflictAlert {
            drug_names,
            message,
        }
    }
}

/// Everything one search invocation produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// The three result buckets
    pub results: SearchResultSet,

    /// Present only when the query matched an adverse reaction on the panel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictAlert>,
}
