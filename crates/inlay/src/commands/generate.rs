//! Props-table generation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use inlay_build::TableGenerator;
use inlay_catalog::{Catalog, TypeIndex};

use crate::config;

/// Run the generate command.
pub async fn run(config_path: &Path, docs: Option<PathBuf>, strict: bool) -> Result<()> {
    let file_config = config::load(config_path)?;

    let catalog = Catalog::load(Path::new(&file_config.catalog.file))
        .with_context(|| format!("Failed to load catalog from {}", file_config.catalog.file))?;
    let types = load_type_index(file_config.catalog.types.as_deref())?;

    tracing::info!("Generating props tables for {} components...", catalog.len());

    let generator = TableGenerator::new(file_config.generate_config(docs, strict), catalog, types)?;
    let report = generator.generate().await?;

    tracing::info!(
        "Updated {} props tables ({} skipped) in {}ms",
        report.pages,
        report.skipped,
        report.duration_ms
    );

    Ok(())
}

/// Load the auxiliary type index.
///
/// An explicitly configured path must exist; the default path is optional
/// and a missing file yields an empty index.
pub(crate) fn load_type_index(configured: Option<&str>) -> Result<TypeIndex> {
    let path = Path::new(configured.unwrap_or(config::DEFAULT_TYPES_FILE));

    if configured.is_none() && !path.exists() {
        tracing::debug!("No type index at {}, continuing without one", path.display());
        return Ok(TypeIndex::default());
    }

    TypeIndex::load(path)
        .with_context(|| format!("Failed to load type index from {}", path.display()))
}
