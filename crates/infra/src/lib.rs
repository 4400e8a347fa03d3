//! # SicMatch Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Catalog sources (CSV files and the embedded reference table)
//! - Configuration loading (environment variables and config files)
//!
//! ## Architecture
//! - Implements traits defined in `sicmatch-core`
//! - Depends on `sicmatch-domain` and `sicmatch-core`
//! - Contains all "impure" code (file I/O, process environment)

pub mod catalog;
pub mod config;

// Re-export commonly used items
pub use catalog::{CsvCatalogSource, EmbeddedCatalogSource};
