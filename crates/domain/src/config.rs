//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    CURRENT_CODE_ACCURACY_THRESHOLD, DEFAULT_MATCH_LIMIT, INDUSTRY_BOOST,
    PREDICTION_ACCURACY_THRESHOLD,
};

/// Application configuration
///
/// Every field has a sensible default, so a config file may specify only
/// the sections it wants to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub matcher: MatcherConfig,
}

/// Classification catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to a two-column CSV source; the embedded catalog is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv_path: Option<String>,
}

/// Fuzzy matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub default_limit: usize,
    pub industry_boost: f64,
    pub current_code_threshold: f64,
    pub prediction_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_MATCH_LIMIT,
            industry_boost: INDUSTRY_BOOST,
            current_code_threshold: CURRENT_CODE_ACCURACY_THRESHOLD,
            prediction_threshold: PREDICTION_ACCURACY_THRESHOLD,
        }
    }
}
