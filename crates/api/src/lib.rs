//! # SicMatch App
//!
//! Application layer - command wrappers and the demonstration entry point.
//!
//! This crate contains:
//! - Classification commands (thin wrappers over the core service)
//! - Application context (dependency injection)
//! - Main entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires infra catalog sources into the core classification service
//! - Exposes plain functions the binary and integration tests drive

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
