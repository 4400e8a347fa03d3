//! Business-activity classification domain

pub mod activity_extractor;
pub mod catalog;
pub mod matcher;
pub mod ports;
pub mod service;
pub mod similarity;

pub use activity_extractor::ActivityExtractor;
pub use catalog::SicCatalog;
pub use matcher::CodeMatcher;
pub use ports::*;
pub use service::SicClassificationService;
