//! Three-bucket medication search with adverse-reaction conflict detection.
//!
//! The engine is a pure function over its inputs: the catalog it borrows, the
//! query, and the user's current drug panel. Every call recomputes the full
//! result set; nothing is cached across queries.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::{contains_normalized, eq_normalized, normalize};
use crate::models::{
    ConflictAlert, MedicationRecord, SearchOutcome, SearchResultSet, UserDrugEntry,
};

/// Search engine over a borrowed medication catalog.
///
/// The catalog is read-only and loaded once; the user panel is passed per
/// call because it may change between invocations.
pub struct SearchEngine<'a> {
    catalog: &'a [MedicationRecord],
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over the given catalog slice.
    pub fn new(catalog: &'a [MedicationRecord]) -> Self {
        SearchEngine { catalog }
    }

    /// Run one search.
    ///
    /// Matching is case-insensitive on the trimmed query:
    /// - `exact`: name equals the query;
    /// - `similar`: records sharing the first exact match's category, then
    ///   partial name matches, deduplicated by id and never overlapping
    ///   `exact`;
    /// - `for_symptom`: records with an indication keyword containing the
    ///   query.
    ///
    /// A conflict alert is attached when the query is contained in an
    /// adverse-reaction symptom of any drug on the user's panel.
    ///
    /// An empty or whitespace-only query returns an empty outcome instead of
    /// degenerating to a full catalog scan match.
    pub fn search(&self, query: &str, user_drugs: &[UserDrugEntry]) -> SearchOutcome {
        let normalized = normalize(query);
        if normalized.is_empty() {
            return SearchOutcome::default();
        }

        let exact: Vec<&MedicationRecord> = self
            .catalog
            .iter()
            .filter(|record| eq_normalized(&record.name, &normalized))
            .collect();

        let partial: Vec<&MedicationRecord> = self
            .catalog
            .iter()
            .filter(|record| {
                contains_normalized(&record.name, &normalized)
                    && !eq_normalized(&record.name, &normalized)
            })
            .collect();

        let similar = self.merge_similar(&exact, &partial);

        let for_symptom: Vec<MedicationRecord> = self
            .catalog
            .iter()
            .filter(|record| {
                record
                    .indications
                    .keywords
                    .iter()
                    .any(|keyword| contains_normalized(keyword, &normalized))
            })
            .cloned()
            .collect();

        let conflict = detect_conflict(query, &normalized, user_drugs);

        let results = SearchResultSet {
            exact: exact.into_iter().cloned().collect(),
            similar,
            for_symptom,
        };

        debug!(
            query = %normalized,
            exact = results.exact.len(),
            similar = results.similar.len(),
            for_symptom = results.for_symptom.len(),
            conflict = conflict.is_some(),
            "search completed"
        );

        SearchOutcome { results, conflict }
    }

    /// Merge category-based similar matches with partial name matches.
    ///
    /// Category expansion takes the category of the *first* exact match and
    /// selects all other catalog records sharing it. Partial matches follow,
    /// skipping ids already included. Exact ids never appear.
    fn merge_similar(
        &self,
        exact: &[&MedicationRecord],
        partial: &[&MedicationRecord],
    ) -> Vec<MedicationRecord> {
        let mut seen: HashSet<u32> = exact.iter().map(|record| record.id).collect();
        let mut similar: Vec<MedicationRecord> = Vec::new();

        if let Some(first) = exact.first() {
            for record in self.catalog {
                if record.category == first.category && seen.insert(record.id) {
                    similar.push(record.clone());
                }
            }
        }

        for record in partial {
            if seen.insert(record.id) {
                similar.push((*record).clone());
            }
        }

        similar
    }
}

/// Check the user's panel for drugs whose adverse reactions contain the query.
///
/// Returns an alert naming every matching drug in panel order, or `None`.
fn detect_conflict(
    raw_query: &str,
    normalized: &str,
    user_drugs: &[UserDrugEntry],
) -> Option<ConflictAlert> {
    let drug_names: Vec<String> = user_drugs
        .iter()
        .filter(|drug| {
            drug.adverse_reactions
                .symptoms
                .iter()
                .any(|symptom| contains_normalized(symptom, normalized))
        })
        .map(|drug| drug.name.clone())
        .collect();

    if drug_names.is_empty() {
        None
    } else {
        Some(ConflictAlert::new(raw_query, drug_names))
    }
}
