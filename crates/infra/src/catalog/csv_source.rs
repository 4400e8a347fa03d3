//! CSV-backed catalog sources
//!
//! The reference table is a two-column CSV (`code,description`) with a
//! header row. Descriptions containing commas are double-quoted. A copy
//! of the UK SIC 2007 reference table is compiled into the binary so
//! the matcher works with no external files.

use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use sicmatch_core::classification::ports::CatalogSource;
use sicmatch_domain::{Result, SicCode, SicMatchError};
use tracing::debug;

/// UK SIC 2007 reference table compiled into the binary
const EMBEDDED_CATALOG_CSV: &str = include_str!("../../data/sic_codes.csv");

/// Catalog source reading a CSV file from disk
pub struct CsvCatalogSource {
    path: PathBuf,
}

impl CsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalogSource {
    fn load_entries(&self) -> Result<Vec<SicCode>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            SicMatchError::Catalog(format!(
                "Failed to read catalog file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let entries = parse_catalog_csv(&contents)?;
        debug!(path = %self.path.display(), count = entries.len(), "catalog file parsed");
        Ok(entries)
    }
}

/// Catalog source backed by the compiled-in reference table
#[derive(Default)]
pub struct EmbeddedCatalogSource;

impl EmbeddedCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for EmbeddedCatalogSource {
    fn load_entries(&self) -> Result<Vec<SicCode>> {
        parse_catalog_csv(EMBEDDED_CATALOG_CSV)
    }
}

/// Parse a two-column `code,description` CSV with a header row
///
/// Blank lines are skipped. A row with any other column count fails the
/// whole load; no partial catalog is produced.
///
/// # Errors
/// Returns `SicMatchError::Catalog` naming the offending line when a row
/// does not have exactly two columns or cannot be parsed.
pub fn parse_catalog_csv(contents: &str) -> Result<Vec<SicCode>> {
    // flexible so uneven rows reach our column check instead of a csv error
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(contents.as_bytes());

    let mut entries = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| SicMatchError::Catalog(format!("Catalog parse error: {e}")))?;

        // whitespace-only lines count as blank
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != 2 {
            let line = record.position().map_or(0, |p| p.line());
            return Err(SicMatchError::Catalog(format!(
                "Catalog line {}: expected 2 columns, found {}",
                line,
                record.len()
            )));
        }

        entries.push(SicCode::new(&record[0], &record[1]));
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rows() {
        let csv = "code,description\n5411,Grocery Stores\n64191,Banks\n";

        let entries = parse_catalog_csv(csv).expect("should parse");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code, "5411");
        assert_eq!(entries[0].description, "Grocery Stores");
        assert_eq!(entries[1].code, "64191");
    }

    #[test]
    fn test_parse_quoted_description_with_comma() {
        let csv = "code,description\n47110,\"Retail sale in non-specialised stores with food, \
                   beverages or tobacco predominating\"\n";

        let entries = parse_catalog_csv(csv).expect("should parse");

        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].description,
            "Retail sale in non-specialised stores with food, beverages or tobacco predominating"
        );
    }

    #[test]
    fn test_header_row_is_skipped() {
        let csv = "code,description\n";

        let entries = parse_catalog_csv(csv).expect("should parse");

        assert!(entries.is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv = "code,description\n5411,Grocery Stores\n\n64191,Banks\n";

        let entries = parse_catalog_csv(csv).expect("should parse");

        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_wrong_column_count_fails_with_line_number() {
        let csv = "code,description\n5411,Grocery Stores\n64191\n";

        let err = parse_catalog_csv(csv).expect_err("should fail");

        match err {
            SicMatchError::Catalog(msg) => {
                assert!(msg.contains("line 3"), "message was: {msg}");
            }
            other => panic!("expected Catalog error, got {other:?}"),
        }
    }

    #[test]
    fn test_embedded_catalog_parses_completely() {
        let entries = EmbeddedCatalogSource::new().load_entries().expect("embedded catalog");

        assert!(entries.len() >= 80, "expected a full reference table, got {}", entries.len());
        assert!(entries.iter().any(|e| e.code == "56210"));
        assert!(entries.iter().any(|e| e.code == "64191"));
        assert!(entries.iter().all(|e| !e.code.is_empty() && !e.description.is_empty()));
    }

    #[test]
    fn test_missing_file_fails_with_catalog_error() {
        let source = CsvCatalogSource::new("/nonexistent/sic_codes.csv");

        let err = source.load_entries().expect_err("should fail");

        assert!(matches!(err, SicMatchError::Catalog(_)));
    }
}
