//! Medsearch CLI - run one catalog search from the command line.
//!
//! Usage: `medsearch <query>`. Prints the search outcome as JSON on stdout;
//! logging goes to stderr. The catalog and user panel come from
//! `MEDSEARCH_CATALOG_PATH` / `MEDSEARCH_PANEL_PATH` when set, otherwise the
//! built-in catalog and an empty panel are used.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use medsearch::{
    builtin_catalog, Catalog, CatalogProvider, Config, InMemoryPanel, SearchEngine,
    StaticCatalogProvider, UserDrugEntry, UserPanelProvider,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging on stderr only; stdout carries the JSON result
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let query = match std::env::args().nth(1) {
        Some(query) => query,
        None => bail!("Usage: medsearch <query>"),
    };

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => builtin_catalog().clone(),
    };

    let panel = InMemoryPanel::new(match &config.panel_path {
        Some(path) => load_panel(path)?,
        None => Vec::new(),
    });

    let provider = StaticCatalogProvider::new(catalog);
    let user_drugs = panel.user_drugs();

    info!(
        records = provider.records().len(),
        panel = user_drugs.len(),
        "running search"
    );

    let engine = SearchEngine::new(provider.records());
    let outcome = engine.search(&query, &user_drugs);

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

/// Load the user panel from a JSON file containing an array of entries.
fn load_panel(path: &Path) -> Result<Vec<UserDrugEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read panel file {}", path.display()))?;
    let drugs: Vec<UserDrugEntry> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse panel file {}", path.display()))?;
    Ok(drugs)
}
