//! Classification service - prediction and accuracy assessment

use std::sync::Arc;

use chrono::Utc;
use sicmatch_domain::constants::{MISSING_CODE_PENALTY, UNKNOWN_SIC_DESCRIPTION};
use sicmatch_domain::{
    AccuracyAssessment, CodeMatch, DualAccuracy, MatcherConfig, PredictionAssessment, Result,
    SicPrediction,
};
use tracing::{debug, warn};

use super::activity_extractor::ActivityExtractor;
use super::catalog::SicCatalog;
use super::matcher::CodeMatcher;
use super::ports::CatalogSource;
use super::similarity;

/// End-to-end classification over a loaded catalog
///
/// Wires the activity extractor and code matcher together and layers the
/// two accuracy methods on top:
///
/// - **Current-code assessment** ("old method"): how well a company's
///   registered code fits its business description, scored by direct
///   text similarity against that code's catalog description.
/// - **Prediction assessment** ("new method"): how confident the top
///   boosted prediction is for the same description.
///
/// The catalog is loaded once at construction and shared immutably, so a
/// service value is cheap to share across threads.
#[derive(Debug)]
pub struct SicClassificationService {
    extractor: ActivityExtractor,
    matcher: CodeMatcher,
    catalog: Arc<SicCatalog>,
    config: MatcherConfig,
}

impl SicClassificationService {
    /// Load the catalog from `source` and build a ready-to-use service
    ///
    /// # Errors
    ///
    /// Returns an error when the source fails to load or the catalog
    /// contains invalid entries (blank fields, duplicate codes).
    pub fn new(source: Arc<dyn CatalogSource>, config: MatcherConfig) -> Result<Self> {
        let catalog = Arc::new(SicCatalog::load(source.as_ref())?);
        if catalog.is_empty() {
            warn!("classification catalog is empty; all predictions will be empty");
        }

        let matcher = CodeMatcher::with_industry_boost(Arc::clone(&catalog), config.industry_boost);

        Ok(Self { extractor: ActivityExtractor::new(), matcher, catalog, config })
    }

    /// Predict the best-fitting codes for a business description
    ///
    /// Extracts the core activity phrase, ranks the catalog against it
    /// with industry boosting, and wraps the result with a generated id
    /// and timestamp. `limit` defaults to the configured match limit.
    pub fn predict(&self, description: &str, limit: Option<usize>) -> SicPrediction {
        let limit = limit.unwrap_or(self.config.default_limit);
        let extracted = self.extractor.extract(description);

        let matches = if description.is_empty() {
            Vec::new()
        } else {
            self.matcher.rank_boosted(&extracted, limit)
        };

        debug!(
            extracted = %extracted,
            matches = matches.len(),
            limit,
            "prediction assembled"
        );

        SicPrediction {
            id: SicPrediction::generate_id(),
            description: description.to_string(),
            extracted_activity: extracted,
            matches,
            created_at: Utc::now(),
        }
    }

    /// Assess how well a company's current code fits its description
    ///
    /// When the code exists in the catalog, confidence is the best of
    /// four similarity metrics between the description and the code's
    /// catalog description. When it does not, confidence falls back to
    /// the top prediction's score with a heavy penalty applied for the
    /// missing code.
    pub fn assess_current_code(&self, description: &str, code: &str) -> AccuracyAssessment {
        if description.is_empty() || code.is_empty() {
            return AccuracyAssessment {
                current_code: code.to_string(),
                current_description: String::new(),
                confidence: 0.0,
                is_accurate: false,
                best_match: None,
                reasoning: "Missing business description or SIC code".to_string(),
            };
        }

        let (confidence, current_description, reasoning) =
            match self.catalog.description_for(code) {
                Some(catalog_description) => {
                    self.score_known_code(description, code, catalog_description)
                }
                None => self.score_unknown_code(description, code),
            };

        let is_accurate = confidence >= self.config.current_code_threshold;

        AccuracyAssessment {
            current_code: code.to_string(),
            current_description,
            confidence: similarity::round_score(confidence),
            is_accurate,
            best_match: self.top_match(description),
            reasoning,
        }
    }

    /// Assess the confidence of the top prediction for a description
    pub fn assess_prediction(&self, description: &str) -> PredictionAssessment {
        let predicted = if description.is_empty() { None } else { self.top_match(description) };

        match predicted {
            Some(top) => {
                let confidence = top.score;
                PredictionAssessment {
                    is_accurate: confidence >= self.config.prediction_threshold,
                    confidence,
                    predicted: Some(top),
                }
            }
            None => {
                PredictionAssessment { predicted: None, confidence: 0.0, is_accurate: false }
            }
        }
    }

    /// Run both accuracy methods for side-by-side comparison
    pub fn dual_accuracy(&self, description: &str, current_code: &str) -> DualAccuracy {
        DualAccuracy {
            current: self.assess_current_code(description, current_code),
            predicted: self.assess_prediction(description),
        }
    }

    /// Catalog description for a code, or the unknown-code fallback text
    pub fn describe_code(&self, code: &str) -> String {
        self.catalog
            .description_for(code)
            .map(str::to_string)
            .unwrap_or_else(|| UNKNOWN_SIC_DESCRIPTION.to_string())
    }

    /// Extract the core activity phrase without running a full prediction
    pub fn extract_activity(&self, description: &str) -> String {
        self.extractor.extract(description)
    }

    /// The loaded catalog
    pub fn catalog(&self) -> &SicCatalog {
        &self.catalog
    }

    /// Confidence for a code that exists in the catalog: best of four
    /// similarity metrics between the raw description and the catalog
    /// description, both lower-cased and trimmed.
    fn score_known_code(
        &self,
        description: &str,
        code: &str,
        catalog_description: &str,
    ) -> (f64, String, String) {
        let clean_description = description.to_lowercase();
        let clean_description = clean_description.trim();
        let clean_catalog = catalog_description.to_lowercase();
        let clean_catalog = clean_catalog.trim();

        let ratio_score = similarity::ratio(clean_description, clean_catalog);
        let partial_score = similarity::partial_ratio(clean_description, clean_catalog);
        let token_sort_score = similarity::token_sort_ratio(clean_description, clean_catalog);
        let token_set_score = similarity::token_set_ratio(clean_description, clean_catalog);

        let confidence =
            ratio_score.max(partial_score).max(token_sort_score).max(token_set_score);

        let reasoning = format!(
            "Exact SIC code {code} found. Best similarity score: {confidence:.1}%. Breakdown: \
             ratio={ratio_score:.1}, partial={partial_score:.1}, token_sort={token_sort_score:.1}, \
             token_set={token_set_score:.1}"
        );

        (confidence, catalog_description.to_string(), reasoning)
    }

    /// Confidence for a code missing from the catalog: the top boosted
    /// prediction's score, penalized for the absent code.
    fn score_unknown_code(&self, description: &str, code: &str) -> (f64, String, String) {
        match self.top_match(description) {
            Some(top) => {
                let confidence = top.score * MISSING_CODE_PENALTY;
                let reasoning = format!(
                    "SIC code {code} not found in database. Best fuzzy match: {} ({}) with {:.1}% \
                     base similarity, penalized to {confidence:.1}%",
                    top.code, top.description, top.score
                );
                (confidence, format!("[Not found: {code}]"), reasoning)
            }
            None => (
                0.0,
                format!("[Unknown: {code}]"),
                format!("SIC code {code} not found and no fuzzy matches available"),
            ),
        }
    }

    /// Top boosted match for a description, if any
    fn top_match(&self, description: &str) -> Option<CodeMatch> {
        if description.is_empty() {
            return None;
        }

        let extracted = self.extractor.extract(description);
        self.matcher.rank_boosted(&extracted, 1).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use sicmatch_domain::{IndustryCategory, SicCode};

    use super::*;

    struct MockCatalogSource {
        entries: Vec<SicCode>,
    }

    impl CatalogSource for MockCatalogSource {
        fn load_entries(&self) -> Result<Vec<SicCode>> {
            Ok(self.entries.clone())
        }
    }

    fn sample_source() -> Arc<dyn CatalogSource> {
        Arc::new(MockCatalogSource {
            entries: vec![
                SicCode::new("5411", "Grocery Stores"),
                SicCode::new("56210", "Event catering activities"),
                SicCode::new("64191", "Banks"),
                SicCode::new("62010", "Computer programming activities"),
                SicCode::new(
                    "47110",
                    "Retail sale in non-specialised stores with food predominating",
                ),
            ],
        })
    }

    fn service() -> SicClassificationService {
        SicClassificationService::new(sample_source(), MatcherConfig::default())
            .expect("sample catalog should load")
    }

    fn empty_service() -> SicClassificationService {
        let source = Arc::new(MockCatalogSource { entries: Vec::new() });
        SicClassificationService::new(source, MatcherConfig::default())
            .expect("empty catalog should load")
    }

    #[test]
    fn test_predict_ranks_grocery_for_supermarket_description() {
        let service = service();

        let prediction = service.predict("Tesco PLC retail supermarket grocery stores", None);

        assert_eq!(prediction.extracted_activity, "retail supermarket grocery store");
        assert!(prediction.matches.len() <= 3);
        assert_eq!(prediction.matches[0].code, "5411");
        assert!(prediction.matches[0].boosts.contains(&IndustryCategory::Retail));
        assert!(prediction.id.starts_with("sic_pred_"));
    }

    #[test]
    fn test_predict_empty_description_has_no_matches() {
        let service = service();

        let prediction = service.predict("", None);

        assert!(prediction.matches.is_empty());
        assert_eq!(prediction.extracted_activity, "");
        assert!(prediction.id.starts_with("sic_pred_"));
    }

    #[test]
    fn test_predict_respects_explicit_limit() {
        let service = service();

        let prediction = service.predict("Simple catering", Some(2));

        assert!(prediction.matches.len() <= 2);
        assert_eq!(prediction.matches[0].code, "56210");
    }

    #[test]
    fn test_assess_current_code_known_code_uses_similarity() {
        let service = service();

        let assessment = service.assess_current_code("Grocery store chain", "5411");

        assert_eq!(assessment.current_description, "Grocery Stores");
        assert!(assessment.confidence >= 90.0, "confidence was {}", assessment.confidence);
        assert!(assessment.is_accurate);
        assert!(assessment.reasoning.contains("Exact SIC code 5411 found"));
        assert!(assessment.best_match.is_some());
    }

    #[test]
    fn test_assess_current_code_missing_inputs() {
        let service = service();

        for (description, code) in [("", "5411"), ("Grocery store chain", ""), ("", "")] {
            let assessment = service.assess_current_code(description, code);

            assert_eq!(assessment.confidence, 0.0);
            assert!(!assessment.is_accurate);
            assert_eq!(assessment.reasoning, "Missing business description or SIC code");
            assert_eq!(assessment.current_description, "");
            assert!(assessment.best_match.is_none());
        }
    }

    #[test]
    fn test_assess_current_code_unknown_code_is_penalized() {
        let service = service();

        let assessment = service.assess_current_code("Simple catering", "99999");

        // Top boosted match is the catering entry at 100.0; the missing
        // code penalty scales it down to 60.0
        assert_eq!(assessment.confidence, 60.0);
        assert!(!assessment.is_accurate);
        assert_eq!(assessment.current_description, "[Not found: 99999]");
        assert!(assessment.reasoning.contains("not found in database"));
        assert!(assessment.reasoning.contains("penalized"));
        assert_eq!(assessment.best_match.as_ref().map(|m| m.code.as_str()), Some("56210"));
    }

    #[test]
    fn test_assess_prediction_confident_for_exact_activity() {
        let service = service();

        let assessment = service.assess_prediction("Event catering activities");

        let predicted = assessment.predicted.expect("should predict a code");
        assert_eq!(predicted.code, "56210");
        assert_eq!(assessment.confidence, 100.0);
        assert!(assessment.is_accurate);
    }

    #[test]
    fn test_assess_prediction_empty_description() {
        let service = service();

        let assessment = service.assess_prediction("");

        assert!(assessment.predicted.is_none());
        assert_eq!(assessment.confidence, 0.0);
        assert!(!assessment.is_accurate);
    }

    #[test]
    fn test_dual_accuracy_flags_mismatched_current_code() {
        let service = service();

        // Description is catering but the registered code is grocery
        let dual = service.dual_accuracy("Simple catering", "5411");

        assert!(!dual.current.is_accurate);
        assert!(dual.predicted.is_accurate);
        assert!(dual.predicted.confidence > dual.current.confidence);
        assert_eq!(
            dual.predicted.predicted.as_ref().map(|m| m.code.as_str()),
            Some("56210")
        );
    }

    #[test]
    fn test_describe_code_falls_back_for_unknown() {
        let service = service();

        assert_eq!(service.describe_code("5411"), "Grocery Stores");
        assert_eq!(service.describe_code("99999"), "Unknown SIC Code");
    }

    #[test]
    fn test_empty_catalog_degrades_gracefully() {
        let service = empty_service();

        let prediction = service.predict("Simple catering", None);
        assert!(prediction.matches.is_empty());

        let assessment = service.assess_current_code("Simple catering", "5411");
        assert_eq!(assessment.confidence, 0.0);
        assert_eq!(assessment.current_description, "[Unknown: 5411]");
        assert!(assessment.reasoning.contains("no fuzzy matches available"));

        let predicted = service.assess_prediction("Simple catering");
        assert!(predicted.predicted.is_none());
    }

    #[test]
    fn test_extract_activity_normalizes_description() {
        let service = service();

        assert_eq!(service.extract_activity("HSBC banking financial"), "bank financial");
    }
}
