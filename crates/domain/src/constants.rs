//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Matching configuration
pub const DEFAULT_MATCH_LIMIT: usize = 3;
pub const CANDIDATE_POOL_FACTOR: usize = 2;
pub const MAX_SCORE: f64 = 100.0;

// Industry boosting
pub const INDUSTRY_BOOST: f64 = 15.0;

// Accuracy thresholds
pub const CURRENT_CODE_ACCURACY_THRESHOLD: f64 = 70.0;
pub const PREDICTION_ACCURACY_THRESHOLD: f64 = 90.0;
pub const MISSING_CODE_PENALTY: f64 = 0.6;

// Prediction records
pub const PREDICTION_ID_PREFIX: &str = "sic_pred_";
pub const PREDICTION_ID_SUFFIX_LEN: usize = 12;
pub const UNKNOWN_SIC_DESCRIPTION: &str = "Unknown SIC Code";

// Fallback extraction (tokens longer than the minimum, capped at the count)
pub const FALLBACK_TOKEN_MIN_LEN: usize = 3;
pub const FALLBACK_TOKEN_COUNT: usize = 3;
