//! Props-table freshness check command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use inlay_build::TableGenerator;
use inlay_catalog::Catalog;

use crate::config;

use super::generate::load_type_index;

/// Run the check command.
pub async fn run(config_path: &Path, docs: Option<PathBuf>) -> Result<()> {
    let file_config = config::load(config_path)?;

    let catalog = Catalog::load(Path::new(&file_config.catalog.file))
        .with_context(|| format!("Failed to load catalog from {}", file_config.catalog.file))?;
    let types = load_type_index(file_config.catalog.types.as_deref())?;

    let generator = TableGenerator::new(file_config.generate_config(docs, false), catalog, types)?;
    let report = generator.check().await?;

    if report.is_current() {
        tracing::info!("{} props tables are up to date", report.checked);
        return Ok(());
    }

    for path in &report.stale {
        tracing::warn!("Stale props table: {}", path);
    }
    for path in &report.missing {
        tracing::warn!("Missing props table: {}", path);
    }

    bail!(
        "{} stale and {} missing props tables; run `inlay generate`",
        report.stale.len(),
        report.missing.len()
    );
}
