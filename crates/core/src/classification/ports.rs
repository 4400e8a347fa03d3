//! Port interfaces for SIC code classification

use sicmatch_domain::types::SicCode;
use sicmatch_domain::Result;

/// Source of classification catalog entries
///
/// Adapters produce the raw (code, description) rows; the core builds a
/// validated [`crate::SicCatalog`] from them. Implementations live in the
/// infra layer (CSV file, embedded constant).
///
/// # Loading Strategy
///
/// Sources are read exactly once, at service construction time. The loaded
/// catalog is immutable for the process lifetime, so implementations do not
/// need caching or invalidation logic.
pub trait CatalogSource: Send + Sync {
    /// Load every catalog entry from the source
    ///
    /// Entries must be returned in source order; ranking uses that order as
    /// the deterministic tie-break.
    ///
    /// # Errors
    /// Returns `SicMatchError::Catalog` when the source is missing or any row
    /// is malformed. A partial catalog is never returned.
    ///
    /// # Example
    /// ```no_run
    /// # use sicmatch_core::CatalogSource;
    /// # fn example(source: &dyn CatalogSource) -> sicmatch_domain::Result<()> {
    /// let entries = source.load_entries()?;
    /// println!("loaded {} classification codes", entries.len());
    /// # Ok(())
    /// # }
    /// ```
    fn load_entries(&self) -> Result<Vec<SicCode>>;
}
