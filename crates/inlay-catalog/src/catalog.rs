//! Catalog and auxiliary type index with case-insensitive lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::property::Properties;

/// Case-insensitively fetch a map entry, returning the canonical key too.
///
/// Page identifiers are lowercase while catalog keys carry the component's
/// source casing, so every lookup by page or category name goes through
/// this helper.
pub fn caseless_get<'a, V>(map: &'a BTreeMap<String, V>, key: &str) -> Option<(&'a str, &'a V)> {
    let want = key.to_lowercase();
    map.iter()
        .find(|(k, _)| k.to_lowercase() == want)
        .map(|(k, v)| (k.as_str(), v))
}

/// The prop catalog: component name -> props.
///
/// Built once per run, either loaded from JSON or produced by source
/// extraction, and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    components: BTreeMap<String, Properties>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the catalog as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })?;

        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Look up a component's props by page name (case-insensitive).
    ///
    /// Returns the canonically cased component name alongside the props.
    pub fn get(&self, name: &str) -> Option<(&str, &Properties)> {
        caseless_get(&self.components, name)
    }

    /// Register a component's props. First insert wins on duplicates.
    pub fn insert(&mut self, name: String, props: Properties) {
        self.components.entry(name).or_insert(props);
    }

    /// All component names in the catalog.
    pub fn names(&self) -> Vec<&str> {
        self.components.keys().map(String::as_str).collect()
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Auxiliary type index: type-source name -> props declared on that type.
///
/// Consulted only for the special-component augmentation step; a source
/// name missing from the index is silently skipped there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeIndex {
    types: BTreeMap<String, Properties>,
}

impl TypeIndex {
    /// Load a type index from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the index as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| CatalogError::Json {
            path: path.display().to_string(),
            source,
        })?;

        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Look up a type source's props by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Properties> {
        caseless_get(&self.types, name).map(|(_, props)| props)
    }

    /// Register a type source's props. First insert wins on duplicates.
    pub fn insert(&mut self, name: String, props: Properties) {
        self.types.entry(name).or_insert(props);
    }

    /// Number of type sources.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the index has no type sources.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Errors that can occur loading or saving catalog data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}
