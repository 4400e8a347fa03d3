//! Integration tests for AppContext construction
//!
//! Verify that contexts build against both catalog sources, carry their
//! configuration through to the service, and fail fast on bad input.

use std::io::Write;

use sicmatch_domain::{Config, SicMatchError};
use sicmatch_lib::context::AppContext;
use sicmatch_lib::predict_sic_codes;
use tempfile::NamedTempFile;

fn write_catalog(csv: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp catalog file");
    file.write_all(csv.as_bytes()).expect("failed to write temp catalog");
    file.flush().expect("failed to flush temp catalog");
    file
}

#[test]
fn test_default_context_uses_embedded_catalog() {
    let ctx = AppContext::new().expect("default context should build");

    assert!(ctx.config.catalog.csv_path.is_none());
    assert!(ctx.service.catalog().len() >= 80, "embedded catalog should be complete");
}

#[test]
fn test_file_backed_context_loads_catalog() {
    let file = write_catalog("code,description\n56210,Event catering activities\n64191,Banks\n");

    let mut config = Config::default();
    config.catalog.csv_path = Some(file.path().to_string_lossy().into_owned());

    let ctx = AppContext::new_with_config(config).expect("file-backed context should build");

    assert_eq!(ctx.service.catalog().len(), 2);
    assert_eq!(ctx.service.describe_code("64191"), "Banks");
}

#[test]
fn test_missing_catalog_file_fails_construction() {
    let mut config = Config::default();
    config.catalog.csv_path = Some("/nonexistent/sic_codes.csv".to_string());

    let err = AppContext::new_with_config(config).expect_err("construction should fail");

    assert!(matches!(err, SicMatchError::Catalog(_)));
    assert!(err.to_string().contains("Failed to read catalog file"));
}

#[test]
fn test_malformed_catalog_fails_construction() {
    let file = write_catalog("code,description\n56210,Event catering activities,extra\n");

    let mut config = Config::default();
    config.catalog.csv_path = Some(file.path().to_string_lossy().into_owned());

    let err = AppContext::new_with_config(config).expect_err("construction should fail");

    assert!(matches!(err, SicMatchError::Catalog(_)));
}

/// The matcher section of the config flows through to prediction defaults.
#[test]
fn test_context_respects_configured_match_limit() {
    let file = write_catalog(
        "code,description\n5411,Grocery Stores\n56210,Event catering activities\n64191,Banks\n",
    );

    let mut config = Config::default();
    config.catalog.csv_path = Some(file.path().to_string_lossy().into_owned());
    config.matcher.default_limit = 1;

    let ctx = AppContext::new_with_config(config).expect("context should build");

    let prediction = predict_sic_codes(&ctx, "Simple catering", None);
    assert_eq!(prediction.matches.len(), 1);
    assert_eq!(prediction.matches[0].code, "56210");
}
