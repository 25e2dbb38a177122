//! Props-table generation over a documentation tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use regex::Regex;
use walkdir::WalkDir;

use inlay_catalog::{Catalog, TypeIndex};

use crate::categorize::{Categorizer, Platform};
use crate::frontmatter::extract_frontmatter;
use crate::templates::{table_rows, PageContext, Section, TemplateEngine};

/// Default pattern matching `components/<page>/**/index.page.mdx`.
pub const DEFAULT_PAGE_PATTERN: &str =
    r"components/([A-Za-z0-9_-]+)/(?:[^/]+/)*index\.page\.mdx$";

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Docs directory to scan for component pages
    pub docs_dir: PathBuf,

    /// Regex a page path must match; capture 1 is the page id
    pub page_pattern: String,

    /// File name written next to each matched page
    pub output_name: String,

    /// Abort on the first unresolved component instead of skipping it
    pub strict: bool,

    /// Platform whose bucket scheme applies
    pub platform: Platform,

    /// Import source for the table components; no import line when absent
    pub components_import: Option<String>,

    /// Extra special-component source entries
    pub special: BTreeMap<String, Vec<String>>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            page_pattern: DEFAULT_PAGE_PATTERN.to_string(),
            output_name: "props-table.mdx".to_string(),
            strict: false,
            platform: Platform::React,
            components_import: None,
            special: BTreeMap::new(),
        }
    }
}

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of props-table files written
    pub pages: usize,

    /// Pages skipped over a missing component or page id
    pub skipped: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// Result of a check run.
#[derive(Debug)]
pub struct CheckReport {
    /// Files compared
    pub checked: usize,

    /// Existing files that differ from what would be generated
    pub stale: Vec<String>,

    /// Expected files that do not exist
    pub missing: Vec<String>,

    /// Pages skipped over a missing component or page id
    pub skipped: usize,
}

impl CheckReport {
    /// Whether every expected file exists with current content.
    pub fn is_current(&self) -> bool {
        self.stale.is_empty() && self.missing.is_empty()
    }
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to read docs: {0}")]
    ReadError(String),

    #[error("Invalid page pattern: {0}")]
    PatternError(String),

    #[error("Cannot extract a page id from path: {path}")]
    PageNameError { path: String },

    #[error("Failed to resolve props for {page}: {message}")]
    MissingPropsError { page: String, message: String },

    #[error("Failed to render props table: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A matched component page.
#[derive(Debug)]
struct PageInfo {
    /// Page id used for the catalog lookup
    component: String,

    /// Sibling output path
    output_path: PathBuf,
}

/// Generates a props-table file next to every component page.
pub struct TableGenerator {
    config: GenerateConfig,
    catalog: Catalog,
    categorizer: Categorizer,
    templates: TemplateEngine,
    page_regex: Regex,
}

impl TableGenerator {
    /// Create a generator; fails if the configured page pattern is invalid.
    pub fn new(
        config: GenerateConfig,
        catalog: Catalog,
        types: TypeIndex,
    ) -> Result<Self, GenerateError> {
        let page_regex = Regex::new(&config.page_pattern)
            .map_err(|e| GenerateError::PatternError(e.to_string()))?;

        let categorizer =
            Categorizer::new(config.platform, types).with_special_sources(config.special.clone());

        Ok(Self {
            config,
            catalog,
            categorizer,
            templates: TemplateEngine::new(),
            page_regex,
        })
    }

    /// Generate props tables for every matched page.
    ///
    /// Pages are processed one at a time; files written before a failure
    /// stay in place.
    pub async fn generate(&self) -> Result<GenerateReport, GenerateError> {
        let start = Instant::now();

        let (pages, mut skipped) = self.discover_pages()?;
        let mut generated = 0;

        for page in &pages {
            let Some(output) = self.render_page(page)? else {
                skipped += 1;
                continue;
            };

            fs::write(&page.output_path, output).map_err(|e| {
                GenerateError::WriteError(format!("{}: {}", page.output_path.display(), e))
            })?;

            tracing::info!("Updated props table for {}", page.component);
            generated += 1;
        }

        Ok(GenerateReport {
            pages: generated,
            skipped,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Compare existing props-table files against what would be generated,
    /// writing nothing.
    pub async fn check(&self) -> Result<CheckReport, GenerateError> {
        let (pages, mut skipped) = self.discover_pages()?;

        let mut checked = 0;
        let mut stale = Vec::new();
        let mut missing = Vec::new();

        for page in &pages {
            let Some(output) = self.render_page(page)? else {
                skipped += 1;
                continue;
            };
            checked += 1;

            match fs::read_to_string(&page.output_path) {
                Ok(existing) if existing == output => {}
                Ok(_) => stale.push(page.output_path.display().to_string()),
                Err(_) => missing.push(page.output_path.display().to_string()),
            }
        }

        Ok(CheckReport {
            checked,
            stale,
            missing,
            skipped,
        })
    }

    /// Discover pages matching the configured pattern.
    ///
    /// Returns the pages in path order plus the number of files skipped
    /// during discovery.
    fn discover_pages(&self) -> Result<(Vec<PageInfo>, usize), GenerateError> {
        if !self.config.docs_dir.exists() {
            return Err(GenerateError::ReadError(format!(
                "Docs directory not found: {}",
                self.config.docs_dir.display()
            )));
        }

        let mut pages = Vec::new();
        let mut skipped = 0;

        for entry in WalkDir::new(&self.config.docs_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            // Normalize separators so the pattern matches on every platform
            let normalized = path.to_string_lossy().replace('\\', "/");

            let Some(caps) = self.page_regex.captures(&normalized) else {
                if is_component_page(&normalized) {
                    if self.config.strict {
                        return Err(GenerateError::PageNameError { path: normalized });
                    }
                    tracing::warn!("Cannot extract a page id from {}, skipping", normalized);
                    skipped += 1;
                }
                continue;
            };

            let mut component = match caps.get(1).map(|m| m.as_str()) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    if self.config.strict {
                        return Err(GenerateError::PageNameError { path: normalized });
                    }
                    tracing::warn!("No page id captured from {}, skipping", normalized);
                    skipped += 1;
                    continue;
                }
            };

            let source = fs::read_to_string(path)
                .map_err(|e| GenerateError::ReadError(format!("{}: {}", path.display(), e)))?;

            match extract_frontmatter(&source) {
                Ok(Some(fm)) => {
                    if !fm.props_table {
                        tracing::debug!("Props table disabled for {}", normalized);
                        continue;
                    }
                    if let Some(name) = fm.component {
                        component = name;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("Bad frontmatter in {}: {}", normalized, e);
                }
            }

            let output_path = path
                .parent()
                .unwrap_or(Path::new(""))
                .join(&self.config.output_name);

            pages.push(PageInfo {
                component,
                output_path,
            });
        }

        pages.sort_by(|a, b| a.output_path.cmp(&b.output_path));

        Ok((pages, skipped))
    }

    /// Render one page's props table.
    ///
    /// An unresolved component yields `None` in permissive mode and an
    /// error in strict mode.
    fn render_page(&self, page: &PageInfo) -> Result<Option<String>, GenerateError> {
        let sorted = match self.categorizer.sort_by_category(&self.catalog, &page.component) {
            Ok(sorted) => sorted,
            Err(e) if self.config.strict => {
                return Err(GenerateError::MissingPropsError {
                    page: page.component.clone(),
                    message: e.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!("Skipping props table for {}: {}", page.component, e);
                return Ok(None);
            }
        };

        let context = PageContext {
            component: sorted.component.clone(),
            import_source: self.config.components_import.clone(),
            main_rows: table_rows(&sorted.main.properties),
            sections: sorted
                .sections
                .iter()
                .map(|bucket| Section {
                    title: bucket.name.clone(),
                    rows: table_rows(&bucket.properties),
                })
                .collect(),
        };

        let mdx = self
            .templates
            .render_page(&context)
            .map_err(|e| GenerateError::TemplateError(e.to_string()))?;

        Ok(Some(mdx))
    }
}

/// A component page the pattern should have named: the default page file
/// under a components directory.
fn is_component_page(path: &str) -> bool {
    path.contains("components/") && path.ends_with("/index.page.mdx")
}
