//! Fuzzy code matching with industry boosting
//!
//! Ranks catalog descriptions against an extracted activity phrase using
//! weighted-ratio similarity. The boosted variant widens the candidate pool,
//! lifts candidates that share an industry category with the query, then
//! re-sorts. Ties always break by catalog order (sorts are stable).

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::debug;

use sicmatch_domain::constants::{CANDIDATE_POOL_FACTOR, INDUSTRY_BOOST, MAX_SCORE};
use sicmatch_domain::types::{CodeMatch, IndustryCategory};

use crate::classification::catalog::SicCatalog;
use crate::classification::similarity::{round_score, weighted_ratio};

/// Ranks classification codes by similarity to a query phrase
#[derive(Debug)]
pub struct CodeMatcher {
    catalog: Arc<SicCatalog>,
    industry_boost: f64,
}

impl CodeMatcher {
    /// Create a matcher over the given catalog with the default boost
    pub fn new(catalog: Arc<SicCatalog>) -> Self {
        Self::with_industry_boost(catalog, INDUSTRY_BOOST)
    }

    /// Create a matcher with a custom industry boost amount
    pub fn with_industry_boost(catalog: Arc<SicCatalog>, industry_boost: f64) -> Self {
        Self { catalog, industry_boost }
    }

    /// Rank catalog entries by weighted-ratio similarity to the query
    ///
    /// Returns at most `limit` results, scores descending, ties in catalog
    /// order. No minimum-score threshold is applied; callers wanting a
    /// confidence floor filter the result themselves. An empty catalog
    /// yields an empty result.
    pub fn rank(&self, query: &str, limit: usize) -> Vec<CodeMatch> {
        let mut scored = self.score_all(query);
        sort_descending(&mut scored);
        scored.truncate(limit);

        scored.into_iter().map(|(idx, score)| self.build_match(idx, score, score, vec![])).collect()
    }

    /// Rank with industry boosting applied
    ///
    /// Fetches a double-size candidate pool, boosts every candidate that
    /// shares an industry category with the query, then re-sorts and
    /// truncates to `limit`. Boosts stack per category and the final score
    /// is clamped to 100.
    pub fn rank_boosted(&self, query: &str, limit: usize) -> Vec<CodeMatch> {
        let pool_size = limit.saturating_mul(CANDIDATE_POOL_FACTOR);
        let mut scored = self.score_all(query);
        sort_descending(&mut scored);
        scored.truncate(pool_size);

        let query_lower = query.to_lowercase();
        let mut boosted: Vec<BoostedCandidate> = scored
            .into_iter()
            .map(|(idx, base)| self.apply_boosts(idx, base, &query_lower))
            .collect();

        // Stable re-sort: candidates tied after boosting keep their base order
        boosted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        boosted.truncate(limit);

        debug!(query = query_lower.as_str(), candidates = boosted.len(), "ranked boosted matches");

        boosted
            .into_iter()
            .map(|c| self.build_match(c.index, c.score, c.base_score, c.boosts))
            .collect()
    }

    fn score_all(&self, query: &str) -> Vec<(usize, f64)> {
        self.catalog
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| (idx, weighted_ratio(query, &entry.description)))
            .collect()
    }

    fn apply_boosts(&self, index: usize, base_score: f64, query_lower: &str) -> BoostedCandidate {
        let description_lower = self.catalog.entries()[index].description.to_lowercase();

        let mut score = base_score;
        let mut boosts = Vec::new();
        for category in IndustryCategory::ALL {
            let query_hit = category.query_terms().iter().any(|term| query_lower.contains(term));
            let description_hit =
                category.description_terms().iter().any(|term| description_lower.contains(term));

            if query_hit && description_hit {
                score = (score + self.industry_boost).min(MAX_SCORE);
                boosts.push(category);
            }
        }

        BoostedCandidate { index, base_score, score, boosts }
    }

    fn build_match(
        &self,
        index: usize,
        score: f64,
        base_score: f64,
        boosts: Vec<IndustryCategory>,
    ) -> CodeMatch {
        let entry = &self.catalog.entries()[index];
        CodeMatch {
            code: entry.code.clone(),
            description: entry.description.clone(),
            score: round_score(score),
            base_score: round_score(base_score),
            boosts,
        }
    }
}

struct BoostedCandidate {
    index: usize,
    base_score: f64,
    score: f64,
    boosts: Vec<IndustryCategory>,
}

/// Stable descending sort by score; ties keep catalog order
fn sort_descending(scored: &mut [(usize, f64)]) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
