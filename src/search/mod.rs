//! Catalog search engine.

mod engine;

pub use engine::SearchEngine;
