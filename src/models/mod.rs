//! Data models for the medication search engine.
//!
//! This module contains the data structures representing catalog medications,
//! the user's tracked drugs, and the result types produced by a search.

pub mod medication;
pub mod result;
pub mod user_drug;

pub use medication::{Indications, MedicationRecord};
pub use result::{ConflictAlert, SearchOutcome, SearchResultSet};
pub use user_drug::{AdverseReactions, UserDrugEntry};
