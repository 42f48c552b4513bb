//! Query normalization and case-folded string comparison.
//!
//! All catalog and panel matching goes through these helpers so that the
//! engine and conflict detection agree on what "matches" means: trimmed,
//! case-folded, substring or equality comparison. No fuzzy scoring.

/// Normalize a query or catalog field for comparison.
///
/// Trims surrounding whitespace and case-folds. An all-whitespace input
/// normalizes to the empty string, which the engine treats as "no query".
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive equality against an already-normalized query.
pub fn eq_normalized(candidate: &str, normalized_query: &str) -> bool {
    normalize(candidate) == normalized_query
}

/// Case-insensitive containment of an already-normalized query.
///
/// Returns false for an empty query; a no-op query must never match the
/// whole catalog.
pub fn contains_normalized(candidate: &str, normalized_query: &str) -> bool {
    if normalized_query.is_empty() {
        return false;
    }
    normalize(candidate).contains(normalized_query)
}
