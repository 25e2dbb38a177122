//! Source tree scanning that builds the catalog and type index.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use inlay_catalog::{Catalog, Properties, TypeIndex};

use crate::interfaces::{parse_declarations, TypeDecl};

/// Errors that can occur while scanning sources.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    DirectoryNotFound(String),
}

/// Scans component sources and accumulates type declarations.
#[derive(Debug, Default)]
pub struct SourceScanner {
    decls: BTreeMap<String, TypeDecl>,
}

impl SourceScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan a directory tree for `.ts`/`.tsx` declarations.
    ///
    /// Test, spec, story, and index files are skipped, as are files that
    /// cannot be read. The first declaration of a name wins. Returns the
    /// number of new declarations collected.
    pub fn scan(&mut self, source_dir: &Path) -> Result<usize, ScanError> {
        if !source_dir.exists() {
            return Err(ScanError::DirectoryNotFound(
                source_dir.display().to_string(),
            ));
        }

        let mut count = 0;

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "ts" && ext != "tsx" {
                continue;
            }

            let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if filename.contains(".test.")
                || filename.contains(".spec.")
                || filename.contains(".stories.")
                || filename.starts_with("index.")
            {
                continue;
            }

            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(_) => continue,
            };

            for decl in parse_declarations(&source) {
                if !self.decls.contains_key(&decl.name) {
                    self.decls.insert(decl.name.clone(), decl);
                    count += 1;
                }
            }
        }

        Ok(count)
    }

    /// Build the auxiliary type index: every declaration's own props.
    pub fn type_index(&self) -> TypeIndex {
        let mut index = TypeIndex::default();
        for (name, decl) in &self.decls {
            index.insert(name.clone(), decl.props.clone());
        }
        index
    }

    /// Build the catalog from `<Component>Props` declarations.
    ///
    /// Props inherited through `extends` are flattened in, each keeping the
    /// category of its declaring type. Own props shadow inherited ones, and
    /// references to unknown types are skipped.
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();

        for name in self.decls.keys() {
            let component = match name.strip_suffix("Props") {
                Some(component) if !component.is_empty() => component,
                _ => continue,
            };

            let mut props = Properties::new();
            let mut seen = BTreeSet::new();
            self.flatten_into(name, &mut seen, &mut props);
            catalog.insert(component.to_string(), props);
        }

        catalog
    }

    fn flatten_into(&self, name: &str, seen: &mut BTreeSet<String>, out: &mut Properties) {
        if !seen.insert(name.to_string()) {
            return;
        }
        let Some(decl) = self.decls.get(name) else {
            return;
        };

        for (prop_name, prop) in &decl.props {
            out.entry(prop_name.clone())
                .or_insert_with(|| prop.clone());
        }
        for parent in &decl.extends {
            self.flatten_into(parent, seen, out);
        }
    }

    /// Number of collected declarations.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}
