//! Business-activity extraction from company descriptions
//!
//! Strips corporate boilerplate from free-text descriptions and pulls out the
//! phrases that describe what the business actually does. The result feeds
//! the fuzzy matcher as the query phrase.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use sicmatch_domain::constants::{FALLBACK_TOKEN_COUNT, FALLBACK_TOKEN_MIN_LEN};

/// Corporate/legal boilerplate removed before pattern matching
const NOISE_WORDS: &[&str] = &[
    "plc",
    "ltd",
    "limited",
    "group",
    "holdings",
    "company",
    "corporation",
    "corp",
    "inc",
    "the",
    "and",
    "through",
    "its",
    "subsidiaries",
    "engaged",
    "in",
    "business",
    "of",
    "activities",
    "services",
    "operations",
];

/// Domain-phrase patterns, evaluated in order. Every match anywhere in the
/// cleaned text is collected; categories are not deduplicated.
const ACTIVITY_PATTERNS: &[(&str, &str)] = &[
    ("food_service", r"(?:food service|catering|restaurant|dining)"),
    ("retail", r"(?:retail|supermarket|grocery|store|shop)"),
    ("financial", r"(?:bank|banking|financial|lending|deposit)"),
    ("software", r"(?:software|technology|computing)"),
    ("manufacturing", r"(?:manufacturing|production|factory)"),
];

/// Whole-word alternation over every noise word
static NOISE_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternation = NOISE_WORDS.join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation))
        .expect("NOISE_REGEX should compile - this is a bug")
});

static COMPILED_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    ACTIVITY_PATTERNS
        .iter()
        .map(|(category, pattern)| {
            let regex =
                Regex::new(pattern).expect("activity pattern should compile - this is a bug");
            (*category, regex)
        })
        .collect()
});

/// Extracts the core business activity from a company description
#[derive(Debug)]
pub struct ActivityExtractor;

impl ActivityExtractor {
    /// Create a new activity extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract an approximate business-activity phrase
    ///
    /// Lower-cases the input, removes boilerplate terms whole-word, then
    /// collects every domain-phrase match in pattern order. When no pattern
    /// matches, falls back to the first few meaningful tokens. The empty
    /// string is a valid result for empty or purely-boilerplate input.
    pub fn extract(&self, description: &str) -> String {
        let lowered = description.to_lowercase();
        let cleaned = NOISE_REGEX.replace_all(&lowered, " ");

        let mut activities: Vec<String> = Vec::new();
        for (category, regex) in COMPILED_PATTERNS.iter() {
            let before = activities.len();
            for found in regex.find_iter(&cleaned) {
                activities.push(found.as_str().to_string());
            }
            if activities.len() > before {
                debug!(category, matched = activities.len() - before, "activity pattern matched");
            }
        }

        if activities.is_empty() {
            activities = cleaned
                .split_whitespace()
                .filter(|word| word.chars().count() > FALLBACK_TOKEN_MIN_LEN)
                .take(FALLBACK_TOKEN_COUNT)
                .map(str::to_string)
                .collect();
        }

        let extracted = activities.join(" ");
        debug!(original = description, extracted = extracted.as_str(), "extracted activity");
        extracted
    }
}

impl Default for ActivityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
