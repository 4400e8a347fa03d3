//! # SicMatch Domain
//!
//! Business domain types and models for SicMatch.
//!
//! This crate contains:
//! - Domain data types (SicCode, CodeMatch, SicPrediction, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and models
//!
//! ## Architecture
//! - No dependencies on other SicMatch crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
