//! # SicMatch Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The business-activity extractor and fuzzy similarity scoring
//! - Port/adapter interfaces (traits)
//! - The catalog value type and classification service
//!
//! ## Architecture Principles
//! - Only depends on `sicmatch-domain`
//! - No file, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classification;

// Re-export specific items to avoid ambiguity
pub use classification::ports::CatalogSource;
pub use classification::similarity;
pub use classification::{ActivityExtractor, CodeMatcher, SicCatalog, SicClassificationService};
