//! Integration tests for adverse-reaction conflict detection.
//!
//! A conflict alert fires when the queried symptom is contained in an
//! adverse-reaction entry of a drug the user already tracks. The alert names
//! exactly the matching drugs, comma-separated, in panel order.

use medsearch::{MedicationRecord, SearchEngine, UserDrugEntry};

fn catalog() -> Vec<MedicationRecord> {
    vec![
        MedicationRecord::new(1, "Paracetamol", "Analgesic").with_keywords(["fever", "pain"]),
        MedicationRecord::new(2, "Ibuprofen", "Analgesic").with_keywords(["pain", "inflammation"]),
    ]
}

/// Worked example: "nausea" against a panel with Aspirin raises the alert.
#[test]
fn test_alert_for_single_drug() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);
    let panel = vec![UserDrugEntry::new("Aspirin").with_symptoms(["nausea", "bleeding"])];

    let outcome = engine.search("nausea", &panel);

    let alert = outcome.conflict.expect("alert expected");
    assert_eq!(alert.drug_names, vec!["Aspirin"]);
    assert!(alert
        .message
        .ends_with("pode ser um efeito colateral de: Aspirin."));
}

/// All matching drugs are listed, in panel order, comma-separated.
#[test]
fn test_alert_lists_every_matching_drug() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);
    let panel = vec![
        UserDrugEntry::new("Warfarin").with_symptoms(["bleeding"]),
        UserDrugEntry::new("Metformin").with_symptoms(["nausea", "diarrhea"]),
        UserDrugEntry::new("Aspirin").with_symptoms(["nausea", "bleeding"]),
    ];

    let outcome = engine.search("nausea", &panel);

    let alert = outcome.conflict.expect("alert expected");
    assert_eq!(alert.drug_names, vec!["Metformin", "Aspirin"]);
    assert!(alert
        .message
        .contains("pode ser um efeito colateral de: Metformin, Aspirin."));
}

/// Symptom comparison is a case-insensitive substring check.
#[test]
fn test_alert_matches_case_insensitive_substring() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);
    let panel = vec![UserDrugEntry::new("Enalapril").with_symptoms(["Dry Cough"])];

    let outcome = engine.search("cough", &panel);

    assert!(outcome.conflict.is_some());
}

/// No alert when the query matches no panel symptom.
#[test]
fn test_no_alert_without_symptom_match() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);
    let panel = vec![UserDrugEntry::new("Aspirin").with_symptoms(["nausea"])];

    let outcome = engine.search("headache", &panel);

    assert!(outcome.conflict.is_none());
}

/// An empty panel never produces an alert.
#[test]
fn test_no_alert_with_empty_panel() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);

    let outcome = engine.search("nausea", &[]);

    assert!(outcome.conflict.is_none());
}

/// Drugs without recorded adverse reactions are skipped.
#[test]
fn test_drug_without_reactions_is_ignored() {
    let catalog = catalog();
    let engine = SearchEngine::new(&catalog);
    let panel = vec![
        UserDrugEntry::new("Vitamin C"),
        UserDrugEntry::new("Aspirin").with_symptoms(["nausea"]),
    ];

    let outcome = engine.search("nausea", &panel);

    let alert = outcome.conflict.expect("alert expected");
    assert_eq!(alert.drug_names, vec!["Aspirin"]);
}

/// The alert rides along with normal search results; a symptom query still
/// fills the `for_symptom` bucket.
#[test]
fn test_alert_does_not_suppress_results() {
    let catalog = vec![
        MedicationRecord::new(1, "Dramin", "Antiemetic").with_keywords(["nausea", "dizziness"]),
    ];
    let engine = SearchEngine::new(&catalog);
    let panel = vec![UserDrugEntry::new("Aspirin").with_symptoms(["nausea"])];

    let outcome = engine.search("nausea", &panel);

    assert_eq!(outcome.results.for_symptom.len(), 1);
    assert!(outcome.conflict.is_some());
}
