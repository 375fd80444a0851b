//! Contract-type classification.

use crate::patterns::CONTRACT_TYPE_PATTERNS;

/// Sentinel returned when no contract-type pattern matches.
pub const UNKNOWN_CONTRACT_TYPE: &str = "Unknown";

/// Match count at which type confidence saturates at 1.0.
const CONFIDENCE_SATURATION: f64 = 10.0;

/// Classify the contract type of `text`.
///
/// Each type's score is the total match count across its patterns;
/// the highest-scoring type wins, with ties resolved to the earliest
/// type in the canonical table order. Confidence is the winning count
/// divided by ten, capped at 1.0. Returns `("Unknown", 0.0)` when
/// nothing matches anywhere.
pub fn classify_contract_type(text: &str) -> (&'static str, f64) {
    let mut best_type = None;
    let mut best_count = 0usize;

    for (contract_type, patterns) in CONTRACT_TYPE_PATTERNS.iter() {
        let count: usize = patterns
            .iter()
            .map(|pattern| pattern.find_iter(text).count())
            .sum();
        if count > best_count {
            best_type = Some(*contract_type);
            best_count = count;
        }
    }

    match best_type {
        Some(contract_type) => {
            let confidence = (best_count as f64 / CONFIDENCE_SATURATION).min(1.0);
            (contract_type, confidence)
        }
        None => (UNKNOWN_CONTRACT_TYPE, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_when_nothing_matches() {
        let (contract_type, confidence) =
            classify_contract_type("The quick brown fox jumps over the lazy dog.");
        assert_eq!(contract_type, UNKNOWN_CONTRACT_TYPE);
        assert_eq!(confidence, 0.0);
    }

    #[test]
    fn test_employment_agreement() {
        let text = "This Employment Agreement is made between the Company and the Employee.";
        let (contract_type, confidence) = classify_contract_type(text);
        assert_eq!(contract_type, "Employment Agreement");
        assert_eq!(confidence, 0.1);
    }

    #[test]
    fn test_confidence_saturates_at_one() {
        let text = "employment agreement ".repeat(12);
        let (contract_type, confidence) = classify_contract_type(&text);
        assert_eq!(contract_type, "Employment Agreement");
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_highest_count_wins() {
        // Two lease mentions against one employment mention.
        let text = "This lease agreement and rent agreement supersedes the employment contract.";
        let (contract_type, _) = classify_contract_type(text);
        assert_eq!(contract_type, "Lease & Rental Agreement");
    }
}
