//! List extensions from the catalog.

use std::path::Path;

use anyhow::{Context, Result};
use scaffold_catalog::load_catalog;

/// Run the extensions command.
pub async fn run(config_path: &Path, query: &str) -> Result<()> {
    let config = super::load_config(config_path)?;

    let catalog = load_catalog(&config.catalog_sources())
        .await
        .context("Failed to load extension catalog")?;

    let hits = catalog.search(query);
    if hits.is_empty() {
        println!("- No extensions found matching your search -");
        return Ok(());
    }

    for entry in &hits {
        let badge = if entry.curated { " [curated]" } else { "" };
        println!("{}{}", entry.extension.name, badge);
        println!("  {}", entry.extension.github);
        println!("  $ {}", entry.extension.install_command);
    }

    tracing::info!("{} of {} extensions", hits.len(), catalog.len());

    Ok(())
}
