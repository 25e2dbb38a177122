//! TypeScript declaration extraction for building prop catalogs.
//!
//! This crate scans component source trees for exported `interface` and
//! object `type` declarations and turns them into the catalog and type
//! index the generation pipeline consumes. Extraction is regex-based:
//! doc comments, optional markers, and extends clauses are recognized,
//! nested brace bodies are not.

pub mod interfaces;
pub mod scanner;

pub use interfaces::{parse_declarations, TypeDecl};
pub use scanner::{ScanError, SourceScanner};
