//! Configuration file loading (inlay.toml).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use inlay_build::{GenerateConfig, Platform, DEFAULT_PAGE_PATTERN};

/// Default auxiliary type index path when `catalog.types` is unset.
pub const DEFAULT_TYPES_FILE: &str = "types.json";

/// Configuration file structure (inlay.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub generate: GenerateSettings,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DocsConfig {
    /// Docs directory scanned for component pages
    #[serde(default = "default_docs_dir")]
    pub dir: String,

    /// Pattern a page path must match; capture 1 is the page id
    #[serde(default = "default_page_pattern")]
    pub pattern: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Prop catalog JSON file
    #[serde(default = "default_catalog_file")]
    pub file: String,

    /// Auxiliary type index JSON file; optional unless set explicitly
    #[serde(default)]
    pub types: Option<String>,

    /// Component sources scanned by `inlay extract`
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Extra special-component entries: page name -> auxiliary sources
    #[serde(default)]
    pub special: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateSettings {
    /// Abort on the first unresolved component
    #[serde(default)]
    pub strict: bool,

    /// Platform whose bucket scheme applies
    #[serde(default)]
    pub platform: Platform,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// File name written next to each matched page
    #[serde(default = "default_output_name")]
    pub name: String,

    /// Import source for the table components
    #[serde(default)]
    pub components_import: Option<String>,
}

impl ConfigFile {
    /// Build the generator configuration, applying CLI overrides.
    pub fn generate_config(self, docs: Option<PathBuf>, strict: bool) -> GenerateConfig {
        GenerateConfig {
            docs_dir: docs.unwrap_or_else(|| PathBuf::from(&self.docs.dir)),
            page_pattern: self.docs.pattern,
            output_name: self.output.name,
            strict: strict || self.generate.strict,
            platform: self.generate.platform,
            components_import: self.output.components_import,
            special: self.catalog.special,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            pattern: default_page_pattern(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_catalog_file(),
            types: None,
            source_dir: default_source_dir(),
            special: BTreeMap::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            name: default_output_name(),
            components_import: None,
        }
    }
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_page_pattern() -> String {
    DEFAULT_PAGE_PATTERN.to_string()
}
fn default_catalog_file() -> String {
    "catalog.json".to_string()
}
fn default_source_dir() -> String {
    "src/components".to_string()
}
fn default_output_name() -> String {
    "props-table.mdx".to_string()
}

/// Load configuration from the given path if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
