//! Application context - dependency injection container

use std::sync::Arc;

use sicmatch_core::{CatalogSource, SicClassificationService};
use sicmatch_domain::{Config, Result};
use sicmatch_infra::{CsvCatalogSource, EmbeddedCatalogSource};
use tracing::info;

/// Application context - holds the configured classification service
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub service: SicClassificationService,
}

impl AppContext {
    /// Create a new application context with default configuration
    pub fn new() -> Result<Self> {
        Self::new_with_config(Config::default())
    }

    /// Create a new application context with custom configuration
    ///
    /// Selects the catalog source from `config.catalog`: a CSV file when
    /// `csv_path` is set, the embedded catalog otherwise. The catalog is
    /// loaded eagerly, so a bad path or malformed file fails construction.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let source: Arc<dyn CatalogSource> = match config.catalog.csv_path.as_deref() {
            Some(path) => {
                info!(path, "loading classification catalog from file");
                Arc::new(CsvCatalogSource::new(path))
            }
            None => {
                info!("using embedded classification catalog");
                Arc::new(EmbeddedCatalogSource::new())
            }
        };

        let service = SicClassificationService::new(source, config.matcher.clone())?;

        Ok(Self { config, service })
    }
}
