//! Static pattern tables for contract and clause classification.
//!
//! Every table here is configuration, not logic: an ordered list of
//! case-insensitive regular expressions per category. The declaration
//! order of each table is the canonical tie-break order for
//! classification, so entries must not be reordered casually.
//!
//! Tables are compiled once on first use and shared process-wide.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clause::ClauseType;
use crate::entity::EntityLabel;

/// Compile a table of raw patterns with case-insensitive matching.
pub(crate) fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("invalid pattern in static table"))
        .collect()
}

/// Raw contract-type patterns, in canonical (tie-break) order.
const CONTRACT_TYPE_TABLE: &[(&str, &[&str])] = &[
    (
        "Employment Agreement",
        &[
            r"employment agreement",
            r"employment contract",
            r"job offer",
            r"appointment letter",
            r"service agreement.*employee",
        ],
    ),
    (
        "Vendor/Supplier Contract",
        &[
            r"vendor agreement",
            r"supplier contract",
            r"purchase order",
            r"supply agreement",
            r"procurement contract",
        ],
    ),
    (
        "Lease & Rental Agreement",
        &[
            r"lease agreement",
            r"rental agreement",
            r"tenancy agreement",
            r"lease deed",
            r"rent agreement",
        ],
    ),
    (
        "Partnership Deed",
        &[
            r"partnership deed",
            r"partnership agreement",
            r"joint venture",
            r"collaboration agreement",
        ],
    ),
    (
        "Service Agreement",
        &[
            r"service agreement",
            r"consulting agreement",
            r"professional services",
            r"service contract",
            r"work order",
        ],
    ),
    (
        "NDA/Confidentiality Agreement",
        &[
            r"non.disclosure agreement",
            r"confidentiality agreement",
            r"nda",
            r"secrecy agreement",
            r"proprietary information",
        ],
    ),
];

/// Compiled contract-type patterns: `(type name, patterns)` per category.
pub(crate) static CONTRACT_TYPE_PATTERNS: Lazy<Vec<(&'static str, Vec<Regex>)>> =
    Lazy::new(|| {
        CONTRACT_TYPE_TABLE
            .iter()
            .map(|(name, patterns)| (*name, compile(patterns)))
            .collect()
    });

/// Raw legal-entity patterns per label, in canonical order.
///
/// These drive the always-on regex extraction pass. Regex-detected
/// dates carry [`EntityLabel::DateExpr`] to keep them distinguishable
/// from dates produced by an optional recognizer backend.
const ENTITY_TABLE: &[(EntityLabel, &[&str])] = &[
    (
        EntityLabel::Party,
        &[
            r"party of the first part",
            r"party of the second part",
            r"the company",
            r"the employee",
            r"the contractor",
            r"the vendor",
            r"the client",
            r"the lessor",
            r"the lessee",
        ],
    ),
    (
        EntityLabel::Monetary,
        &[
            r"₹\s*[\d,]+",
            r"rs\.?\s*[\d,]+",
            r"rupees?\s+[\d,]+",
            r"\$\s*[\d,]+",
            r"usd\s*[\d,]+",
            r"dollars?\s+[\d,]+",
        ],
    ),
    (
        EntityLabel::DateExpr,
        &[
            r"\d{1,2}[/-]\d{1,2}[/-]\d{2,4}",
            r"\d{1,2}\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{2,4}",
            r"(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{2,4}",
        ],
    ),
    (
        EntityLabel::Duration,
        &[
            r"\d+\s+(days?|weeks?|months?|years?)",
            r"(one|two|three|four|five|six|seven|eight|nine|ten)\s+(days?|weeks?|months?|years?)",
        ],
    ),
];

/// Compiled legal-entity patterns: `(label, patterns)` per category.
pub(crate) static ENTITY_PATTERNS: Lazy<Vec<(EntityLabel, Vec<Regex>)>> = Lazy::new(|| {
    ENTITY_TABLE
        .iter()
        .map(|(label, patterns)| (*label, compile(patterns)))
        .collect()
});

/// Raw clause-type patterns, in canonical (tie-break) order.
const CLAUSE_TYPE_TABLE: &[(ClauseType, &[&str])] = &[
    (
        ClauseType::Termination,
        &[
            r"termination",
            r"terminate",
            r"end.*agreement",
            r"expiry",
            r"dissolution",
            r"breach.*terminate",
        ],
    ),
    (
        ClauseType::Payment,
        &[
            r"payment",
            r"salary",
            r"compensation",
            r"remuneration",
            r"fees?",
            r"amount",
            r"consideration",
        ],
    ),
    (
        ClauseType::Liability,
        &[
            r"liability",
            r"liable",
            r"responsible",
            r"damages",
            r"indemnity",
            r"indemnification",
            r"loss",
        ],
    ),
    (
        ClauseType::Confidentiality,
        &[
            r"confidential",
            r"proprietary",
            r"trade secret",
            r"non.disclosure",
            r"secrecy",
        ],
    ),
    (
        ClauseType::IntellectualProperty,
        &[
            r"intellectual property",
            r"copyright",
            r"trademark",
            r"patent",
            r"trade mark",
            r"ip rights",
        ],
    ),
    (
        ClauseType::NonCompete,
        &[
            r"non.compete",
            r"restraint.*trade",
            r"competition",
            r"solicit.*employee",
            r"solicit.*client",
        ],
    ),
];

/// Compiled clause-type patterns: `(clause type, patterns)` per category.
pub(crate) static CLAUSE_TYPE_PATTERNS: Lazy<Vec<(ClauseType, Vec<Regex>)>> = Lazy::new(|| {
    CLAUSE_TYPE_TABLE
        .iter()
        .map(|(clause_type, patterns)| (*clause_type, compile(patterns)))
        .collect()
});

/// Vague-language patterns for ambiguity detection.
const AMBIGUITY_TABLE: &[&str] = &[
    r"reasonable\s+\w+",
    r"appropriate\s+\w+",
    r"satisfactory\s+\w+",
    r"as soon as possible",
    r"in due course",
    r"from time to time",
    r"best efforts",
    r"commercially reasonable",
    r"material\s+\w+",
    r"substantial\s+\w+",
    r"significant\s+\w+",
];

/// Compiled vague-language patterns.
pub(crate) static AMBIGUITY_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(AMBIGUITY_TABLE));

/// Markers that separate clauses: numbered items, lettered sub-clauses,
/// all-caps section headers with a trailing colon, and the recital
/// keywords WHEREAS / NOW THEREFORE.
pub(crate) static CLAUSE_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\n\s*\d+\.|\n\s*\([a-z]\)|\n\s*[A-Z][A-Z\s]+:|\n\s*WHEREAS|\n\s*NOW THEREFORE")
        .expect("invalid clause separator pattern")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tables_compile() {
        // Forcing the lazy cells surfaces any bad pattern immediately.
        assert_eq!(CONTRACT_TYPE_PATTERNS.len(), 6);
        assert_eq!(ENTITY_PATTERNS.len(), 4);
        assert_eq!(CLAUSE_TYPE_PATTERNS.len(), 6);
        assert_eq!(AMBIGUITY_PATTERNS.len(), 11);
        assert!(CLAUSE_SEPARATOR.is_match("\n1. First clause"));
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let (_, employment) = &CONTRACT_TYPE_PATTERNS[0];
        assert!(employment[0].is_match("EMPLOYMENT AGREEMENT"));
        assert!(employment[0].is_match("employment agreement"));
    }

    #[test]
    fn test_entity_table_order() {
        let labels: Vec<_> = ENTITY_PATTERNS.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![
                EntityLabel::Party,
                EntityLabel::Monetary,
                EntityLabel::DateExpr,
                EntityLabel::Duration,
            ]
        );
    }
}
