//! Immutable classification catalog
//!
//! The catalog is built once from a [`CatalogSource`] and never mutated, so
//! it can be shared across threads behind an `Arc` without locking. Entries
//! keep their source order; ranking uses that order as the deterministic
//! tie-break. Lookups are keyed by code, so duplicate descriptions are two
//! independent entries rather than a silent overwrite.

use std::collections::HashMap;

use tracing::info;

use sicmatch_domain::types::SicCode;
use sicmatch_domain::{Result, SicMatchError};

use crate::classification::ports::CatalogSource;

/// Validated, immutable set of classification entries
#[derive(Debug, Clone)]
pub struct SicCatalog {
    entries: Vec<SicCode>,
    by_code: HashMap<String, usize>,
}

impl SicCatalog {
    /// Build a catalog from raw entries, validating as it goes
    ///
    /// Codes and descriptions are trimmed. An empty entry list is a valid
    /// (degenerate) catalog; matching against it yields empty results.
    ///
    /// # Errors
    /// Returns `SicMatchError::Catalog` for a blank code, a blank
    /// description, or a duplicate code.
    pub fn from_entries(entries: Vec<SicCode>) -> Result<Self> {
        let mut validated = Vec::with_capacity(entries.len());
        let mut by_code = HashMap::with_capacity(entries.len());

        for (row, entry) in entries.into_iter().enumerate() {
            let code = entry.code.trim().to_string();
            let description = entry.description.trim().to_string();

            if code.is_empty() {
                return Err(SicMatchError::Catalog(format!("entry {} has an empty code", row)));
            }
            if description.is_empty() {
                return Err(SicMatchError::Catalog(format!(
                    "entry {} ({}) has an empty description",
                    row, code
                )));
            }
            if by_code.insert(code.clone(), validated.len()).is_some() {
                return Err(SicMatchError::Catalog(format!("duplicate code {}", code)));
            }

            validated.push(SicCode { code, description });
        }

        Ok(Self { entries: validated, by_code })
    }

    /// Load and validate the catalog from a source
    pub fn load(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = Self::from_entries(source.load_entries()?)?;
        info!(count = catalog.len(), "classification catalog loaded");
        Ok(catalog)
    }

    /// Entries in source order
    pub fn entries(&self) -> &[SicCode] {
        &self.entries
    }

    /// Description for a code, if present. The code is trimmed before lookup.
    pub fn description_for(&self, code: &str) -> Option<&str> {
        self.by_code.get(code.trim()).map(|&idx| self.entries[idx].description.as_str())
    }

    /// Whether the catalog carries the given code
    pub fn contains(&self, code: &str) -> bool {
        self.by_code.contains_key(code.trim())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
