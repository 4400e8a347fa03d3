//! Classification catalog sources
//!
//! File-backed and embedded implementations of the core `CatalogSource`
//! port.

pub mod csv_source;

// Re-export commonly used items
pub use csv_source::{CsvCatalogSource, EmbeddedCatalogSource};
