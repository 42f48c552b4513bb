//! User drug model representing a medication the user already tracks.

use serde::{Deserialize, Serialize};

/// Known adverse reactions of a tracked medication.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AdverseReactions {
    /// Ordered list of symptom terms ("nausea", "bleeding", ...)
    pub symptoms: Vec<String>,
}

/// A medication on the user's personal panel.
///
/// Owned by the panel; the search engine only reads it when checking whether
/// a queried symptom could be an adverse reaction of something the user is
/// already taking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDrugEntry {
    /// Display name of the drug
    pub name: String,

    /// Adverse reactions reported for this drug
    #[serde(default)]
    pub adverse_reactions: AdverseReactions,
}

impl UserDrugEntry {
    /// Create an entry with the given name and no known adverse reactions.
    pub fn new(name: impl Into<String>) -> Self {
        UserDrugEntry {
            name: name.into(),
            adverse_reactions: AdverseReactions::default(),
        }
    }

    /// Builder-style helper to attach adverse-reaction symptoms.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.adverse_reactions.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }
}
