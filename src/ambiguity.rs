//! Vague-language detection.
//!
//! Ambiguities are flagged for human review, never scored: phrases
//! like "reasonable efforts" or "from time to time" leave obligations
//! open to interpretation.

use crate::patterns::AMBIGUITY_PATTERNS;

/// Detect vague-language phrases in `text`.
///
/// Returns the matched phrases deduplicated, in first-seen order.
pub fn detect_ambiguity(text: &str) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();
    for pattern in AMBIGUITY_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            let phrase = m.as_str().to_string();
            if !phrases.contains(&phrase) {
                phrases.push(phrase);
            }
        }
    }
    phrases
}
