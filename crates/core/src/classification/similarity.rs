//! Fuzzy string similarity scoring
//!
//! Weighted-ratio scoring in the style of the classic fuzzywuzzy library,
//! built on `strsim` primitives. All public functions return scores in
//! [0.0, 100.0].

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

// Weighted-ratio scales (fuzzywuzzy defaults)
const UNBASE_SCALE: f64 = 0.95;
const PARTIAL_SCALE: f64 = 0.90;
const LONG_PARTIAL_SCALE: f64 = 0.60;
const PARTIAL_LENGTH_RATIO: f64 = 1.5;
const LONG_LENGTH_RATIO: f64 = 8.0;

/// Normalize a string for comparison: lowercase, replace non-alphanumeric
/// characters with spaces, collapse runs of whitespace.
pub fn full_process(s: &str) -> String {
    let mut cleaned = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            cleaned.extend(c.to_lowercase());
        } else {
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain full-string similarity (normalized Levenshtein)
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b) * 100.0
}

/// Best alignment of the shorter string against any equal-length window of
/// the longer one
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return if a == b { 100.0 } else { 0.0 };
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let (short, long) =
        if a_chars.len() <= b_chars.len() { (a_chars, b_chars) } else { (b_chars, a_chars) };

    let short_str: String = short.iter().collect();
    let window = short.len();
    let mut best: f64 = 0.0;

    for start in 0..=(long.len() - window) {
        let slice: String = long[start..start + window].iter().collect();
        best = best.max(ratio(&short_str, &slice));
        if best >= 100.0 {
            break;
        }
    }

    best
}

/// Similarity after sorting tokens alphabetically; robust to word reordering
///
/// Inputs are normalized with [`full_process`] before tokenizing, so
/// callers may pass raw text.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (full_process(a), full_process(b));
    ratio(&sorted_tokens(&a), &sorted_tokens(&b))
}

/// Similarity over shared and distinct token sets; robust to partial overlap
///
/// Inputs are normalized with [`full_process`] before tokenizing, so
/// callers may pass raw text.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (full_process(a), full_process(b));
    let (base, combined_a, combined_b) = token_set_strings(&a, &b);
    ratio(&base, &combined_a).max(ratio(&base, &combined_b)).max(ratio(&combined_a, &combined_b))
}

/// Weighted-ratio composite score
///
/// Blends full-string similarity with token-sort and token-set variants so
/// the score tolerates token reordering and partial overlap. When the two
/// strings differ substantially in length, best-window (partial) variants
/// engage at a reduced weight. Both inputs are normalized with
/// [`full_process`] first; if either side normalizes to the empty string the
/// score is 0.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let p1 = full_process(a);
    let p2 = full_process(b);
    if p1.is_empty() || p2.is_empty() {
        return 0.0;
    }

    let base = ratio(&p1, &p2);
    let len1 = p1.chars().count() as f64;
    let len2 = p2.chars().count() as f64;
    let length_ratio = len1.max(len2) / len1.min(len2);

    if length_ratio < PARTIAL_LENGTH_RATIO {
        let tsort = token_sort_ratio(&p1, &p2) * UNBASE_SCALE;
        let tset = token_set_ratio(&p1, &p2) * UNBASE_SCALE;
        return base.max(tsort).max(tset);
    }

    let partial_scale =
        if length_ratio > LONG_LENGTH_RATIO { LONG_PARTIAL_SCALE } else { PARTIAL_SCALE };
    let partial = partial_ratio(&p1, &p2) * partial_scale;
    let ptsort = partial_token_sort_ratio(&p1, &p2) * UNBASE_SCALE * partial_scale;
    let ptset = partial_token_set_ratio(&p1, &p2) * UNBASE_SCALE * partial_scale;

    base.max(partial).max(ptsort).max(ptset)
}

/// Round a score to one decimal place for result presentation
///
/// Internal comparisons keep full precision; rounding happens only when a
/// score lands in a result type.
pub fn round_score(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    let (base, combined_a, combined_b) = token_set_strings(a, b);
    partial_ratio(&base, &combined_a)
        .max(partial_ratio(&base, &combined_b))
        .max(partial_ratio(&combined_a, &combined_b))
}

/// Build the three comparison strings for token-set scoring: the sorted
/// shared tokens alone, and the shared tokens extended with each side's
/// distinct tokens.
fn token_set_strings(a: &str, b: &str) -> (String, String, String) {
    let set_a: BTreeSet<&str> = a.split_whitespace().collect();
    let set_b: BTreeSet<&str> = b.split_whitespace().collect();

    let base = set_a.intersection(&set_b).copied().collect::<Vec<_>>().join(" ");
    let diff_ab = set_a.difference(&set_b).copied().collect::<Vec<_>>().join(" ");
    let diff_ba = set_b.difference(&set_a).copied().collect::<Vec<_>>().join(" ");

    let combined_a = join_nonempty(&base, &diff_ab);
    let combined_b = join_nonempty(&base, &diff_ba);
    (base, combined_a, combined_b)
}

fn join_nonempty(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{} {}", a, b),
    }
}
