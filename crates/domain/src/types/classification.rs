//! Type definitions for SIC code classification
//!
//! This module defines core types for catalog entries, fuzzy match results,
//! recorded predictions, and accuracy assessments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{PREDICTION_ID_PREFIX, PREDICTION_ID_SUFFIX_LEN};

/// Single entry in the classification catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SicCode {
    /// Short numeric identifier (e.g., "56210")
    pub code: String,

    /// Official description (e.g., "Event catering activities")
    pub description: String,
}

impl SicCode {
    /// Create a new catalog entry
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self { code: code.into(), description: description.into() }
    }
}

/// Industry category eligible for score boosting
///
/// Boosting only engages when both the query phrase and the candidate
/// description carry a term from the same category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    /// Catering, restaurants, food service
    Hospitality,
    /// Retail trade, stores, shops
    Retail,
    /// Banks and financial services
    Financial,
}

impl IndustryCategory {
    /// All categories, in boost evaluation order
    pub const ALL: [Self; 3] = [Self::Hospitality, Self::Retail, Self::Financial];

    /// Terms that mark a query phrase as belonging to this category
    pub fn query_terms(&self) -> &'static [&'static str] {
        match self {
            Self::Hospitality => &["catering", "restaurant", "food"],
            Self::Retail => &["retail", "supermarket", "grocery", "store"],
            Self::Financial => &["bank", "financial"],
        }
    }

    /// Terms that mark a catalog description as belonging to this category
    pub fn description_terms(&self) -> &'static [&'static str] {
        match self {
            Self::Hospitality => &["catering", "restaurant", "food"],
            Self::Retail => &["retail", "store", "shop"],
            Self::Financial => &["bank", "financial"],
        }
    }
}

/// Single ranked match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeMatch {
    /// Matched classification code
    pub code: String,

    /// Catalog description of the matched code
    pub description: String,

    /// Final score in [0, 100] after boosting, rounded to one decimal
    pub score: f64,

    /// Similarity score before boosting
    pub base_score: f64,

    /// Industry categories that contributed a boost
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub boosts: Vec<IndustryCategory>,
}

impl CodeMatch {
    /// Whether any industry boost contributed to the final score
    pub fn boosted(&self) -> bool {
        !self.boosts.is_empty()
    }
}

/// Recorded prediction run for one business description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SicPrediction {
    /// Generated identifier (`sic_pred_` + 12 hex chars)
    pub id: String,

    /// Raw business description supplied by the caller
    pub description: String,

    /// Activity phrase the matches were ranked against
    pub extracted_activity: String,

    /// Ranked matches, best first
    pub matches: Vec<CodeMatch>,

    /// When the prediction was produced
    pub created_at: DateTime<Utc>,
}

impl SicPrediction {
    /// Generate a fresh prediction identifier
    pub fn generate_id() -> String {
        let hex = Uuid::new_v4().simple().to_string();
        format!("{}{}", PREDICTION_ID_PREFIX, &hex[..PREDICTION_ID_SUFFIX_LEN])
    }
}

/// Accuracy assessment of an existing registry code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyAssessment {
    /// The registry code under assessment
    pub current_code: String,

    /// Catalog description of that code, or a not-found marker
    pub current_description: String,

    /// Confidence in [0, 100], rounded to one decimal
    pub confidence: f64,

    /// Whether confidence clears the registry-code threshold
    pub is_accurate: bool,

    /// Best catalog match for the description, for comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_match: Option<CodeMatch>,

    /// How the confidence was derived
    pub reasoning: String,
}

/// Accuracy assessment of the best predicted code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionAssessment {
    /// Top-ranked prediction, if the catalog produced one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted: Option<CodeMatch>,

    /// Confidence in [0, 100], rounded to one decimal
    pub confidence: f64,

    /// Whether confidence clears the prediction threshold
    pub is_accurate: bool,
}

/// Side-by-side accuracy of the registry code versus the best prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DualAccuracy {
    pub current: AccuracyAssessment,
    pub predicted: PredictionAssessment,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Match results must serialize with the stable `code` / `description` /
    /// `score` field names consumers depend on.
    #[test]
    fn test_code_match_json_field_names() {
        let m = CodeMatch {
            code: "56210".to_string(),
            description: "Event catering activities".to_string(),
            score: 95.0,
            base_score: 80.0,
            boosts: vec![IndustryCategory::Hospitality],
        };

        let parsed = serde_json::to_value(&m).unwrap();

        assert_eq!(parsed["code"], "56210");
        assert_eq!(parsed["description"], "Event catering activities");
        assert_eq!(parsed["score"].as_f64().unwrap(), 95.0);
        assert_eq!(parsed["base_score"].as_f64().unwrap(), 80.0);
        assert_eq!(parsed["boosts"][0], "hospitality");
    }

    /// Boost list is omitted from JSON when no boost applied.
    #[test]
    fn test_code_match_omits_empty_boosts() {
        let m = CodeMatch {
            code: "62010".to_string(),
            description: "Computer programming activities".to_string(),
            score: 40.0,
            base_score: 40.0,
            boosts: vec![],
        };

        let parsed = serde_json::to_value(&m).unwrap();

        assert!(parsed.get("boosts").is_none());
        assert!(!m.boosted());
    }

    #[test]
    fn test_prediction_id_format() {
        let id = SicPrediction::generate_id();

        assert!(id.starts_with(PREDICTION_ID_PREFIX));
        assert_eq!(id.len(), PREDICTION_ID_PREFIX.len() + PREDICTION_ID_SUFFIX_LEN);
        let suffix = &id[PREDICTION_ID_PREFIX.len()..];
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(suffix.to_lowercase(), suffix);
    }

    #[test]
    fn test_prediction_ids_are_unique() {
        let a = SicPrediction::generate_id();
        let b = SicPrediction::generate_id();
        assert_ne!(a, b);
    }

    /// Prediction round-trips through JSON with all fields intact.
    #[test]
    fn test_prediction_serialization_round_trip() {
        let prediction = SicPrediction {
            id: SicPrediction::generate_id(),
            description: "Tesco PLC retail supermarket grocery stores".to_string(),
            extracted_activity: "retail supermarket grocery store".to_string(),
            matches: vec![CodeMatch {
                code: "47110".to_string(),
                description: "Retail sale in non-specialised stores with food, beverages or \
                              tobacco predominating"
                    .to_string(),
                score: 92.3,
                base_score: 77.3,
                boosts: vec![IndustryCategory::Retail],
            }],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&prediction).unwrap();
        let deserialized: SicPrediction = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id, prediction.id);
        assert_eq!(deserialized.extracted_activity, prediction.extracted_activity);
        assert_eq!(deserialized.matches.len(), 1);
        assert_eq!(deserialized.matches[0].code, "47110");
    }

    #[test]
    fn test_industry_category_terms_are_lowercase() {
        for category in IndustryCategory::ALL {
            for term in category.query_terms().iter().chain(category.description_terms()) {
                assert_eq!(*term, term.to_lowercase());
            }
        }
    }
}
