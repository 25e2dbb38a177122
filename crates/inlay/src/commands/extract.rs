//! Catalog extraction command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use inlay_extract::SourceScanner;

use crate::config;

/// Run the extract command.
pub async fn run(config_path: &Path, source: Option<PathBuf>) -> Result<()> {
    let file_config = config::load(config_path)?;

    let source_dir = source.unwrap_or_else(|| PathBuf::from(&file_config.catalog.source_dir));

    tracing::info!("Scanning {} for prop declarations...", source_dir.display());

    let mut scanner = SourceScanner::new();
    let count = scanner.scan(&source_dir)?;
    tracing::info!("Collected {} type declarations", count);

    let catalog = scanner.catalog();
    let catalog_path = Path::new(&file_config.catalog.file);
    catalog
        .save(catalog_path)
        .with_context(|| format!("Failed to write {}", catalog_path.display()))?;
    tracing::info!(
        "Wrote {} components to {}",
        catalog.len(),
        catalog_path.display()
    );

    let types = scanner.type_index();
    let types_path = Path::new(
        file_config
            .catalog
            .types
            .as_deref()
            .unwrap_or(config::DEFAULT_TYPES_FILE),
    );
    types
        .save(types_path)
        .with_context(|| format!("Failed to write {}", types_path.display()))?;
    tracing::info!(
        "Wrote {} type entries to {}",
        types.len(),
        types_path.display()
    );

    Ok(())
}
