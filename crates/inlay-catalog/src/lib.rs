//! Prop metadata catalog for component documentation.
//!
//! This crate defines the catalog shape an upstream type extractor produces
//! (component name -> prop name -> prop metadata, each prop tagged with a
//! category label) and the auxiliary type index consulted for components
//! whose props live on shared declarations.

pub mod catalog;
pub mod property;

pub use catalog::{caseless_get, Catalog, CatalogError, TypeIndex};
pub use property::{Description, Properties, Property};
