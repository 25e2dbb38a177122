//! Props-table generation for component documentation pages.
//!
//! Discovers component pages under a docs tree, sorts each component's
//! catalog props into table buckets, and writes a generated MDX props table
//! next to every page.

pub mod builder;
pub mod categorize;
pub mod frontmatter;
pub mod templates;

pub use builder::{
    CheckReport, GenerateConfig, GenerateError, GenerateReport, TableGenerator,
    DEFAULT_PAGE_PATTERN,
};
pub use categorize::{
    default_special_sources, BucketScheme, CategorizeError, CategorizedProps, Categorizer,
    CategoryBucket, Platform,
};
pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use templates::{compare_prop_names, table_rows, PageContext, Row, Section, TemplateEngine};
