//! Clause segmentation, classification, and duty extraction.
//!
//! A clause is a contiguous span of contract text produced by
//! [`segment_clauses`], and is the unit of type classification and
//! downstream risk analysis. Risk levels are deliberately not stored
//! on the clause; the risk engine keys its findings by clause index
//! to avoid coupling the two models.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::patterns::{CLAUSE_SEPARATOR, CLAUSE_TYPE_PATTERNS};

/// Minimum stripped length (in characters) for a segment to count as
/// a clause. Shorter fragments are headings or noise.
const MIN_CLAUSE_LEN: usize = 50;

/// Category vocabulary for clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClauseType {
    /// Termination and expiry provisions
    Termination,
    /// Payment, fees, and compensation
    Payment,
    /// Liability, damages, and indemnity
    Liability,
    /// Confidentiality and non-disclosure
    Confidentiality,
    /// Intellectual-property provisions
    IntellectualProperty,
    /// Non-compete and non-solicitation
    NonCompete,
    /// Fallback when no category pattern matches
    General,
}

/// A segmented contract clause with its classification and the
/// duties extracted from it. Created once per segmented span and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractClause {
    /// Clause text as segmented (trimmed)
    pub text: String,
    /// Classified clause category
    pub clause_type: ClauseType,
    /// Reserved for document-structure analysis; always empty here
    pub section: String,
    /// Phrases following obligation triggers (shall, must, ...)
    pub obligations: Vec<String>,
    /// Phrases following right triggers (may, entitled to, ...)
    pub rights: Vec<String>,
    /// Phrases following prohibition triggers (shall not, ...)
    pub prohibitions: Vec<String>,
}

impl ContractClause {
    /// Build a clause from a segmented span: classify it and extract
    /// its obligations, rights, and prohibitions.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let clause_type = classify_clause_type(&text);
        let (obligations, rights, prohibitions) =
            extract_obligations_rights_prohibitions(&text);
        Self {
            text,
            clause_type,
            section: String::new(),
            obligations,
            rights,
            prohibitions,
        }
    }
}

/// Split contract text into clause spans.
///
/// Splits on numbered-list markers, lettered sub-clauses, all-caps
/// section headers, and WHEREAS / NOW THEREFORE recitals, then drops
/// stripped segments of 50 characters or fewer. Surviving segments
/// keep original document order.
pub fn segment_clauses(text: &str) -> Vec<String> {
    CLAUSE_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|segment| segment.chars().count() > MIN_CLAUSE_LEN)
        .map(str::to_string)
        .collect()
}

/// Classify a clause by summed pattern-match counts per category.
///
/// Returns [`ClauseType::General`] when nothing matches. Ties resolve
/// to the earliest category in the canonical table order.
pub fn classify_clause_type(clause_text: &str) -> ClauseType {
    let mut best = ClauseType::General;
    let mut best_count = 0usize;

    for (clause_type, patterns) in CLAUSE_TYPE_PATTERNS.iter() {
        let count: usize = patterns
            .iter()
            .map(|pattern| pattern.find_iter(clause_text).count())
            .sum();
        if count > best_count {
            best = *clause_type;
            best_count = count;
        }
    }

    best
}

/// Trigger phrases whose trailing text (up to the next period) is an
/// obligation.
const OBLIGATION_TRIGGERS: &[&str] = &[
    r"shall\s+([^.]+)",
    r"must\s+([^.]+)",
    r"required to\s+([^.]+)",
    r"obligated to\s+([^.]+)",
];

/// Trigger phrases for rights.
const RIGHT_TRIGGERS: &[&str] = &[
    r"entitled to\s+([^.]+)",
    r"has the right to\s+([^.]+)",
    r"may\s+([^.]+)",
    r"permitted to\s+([^.]+)",
];

/// Trigger phrases for prohibitions.
const PROHIBITION_TRIGGERS: &[&str] = &[
    r"shall not\s+([^.]+)",
    r"must not\s+([^.]+)",
    r"prohibited from\s+([^.]+)",
    r"cannot\s+([^.]+)",
];

static OBLIGATION_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| crate::patterns::compile(OBLIGATION_TRIGGERS));
static RIGHT_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| crate::patterns::compile(RIGHT_TRIGGERS));
static PROHIBITION_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| crate::patterns::compile(PROHIBITION_TRIGGERS));

fn capture_after_triggers(clause_text: &str, patterns: &[Regex]) -> Vec<String> {
    let mut out = Vec::new();
    for pattern in patterns {
        for caps in pattern.captures_iter(clause_text) {
            if let Some(m) = caps.get(1) {
                out.push(m.as_str().trim().to_string());
            }
        }
    }
    out
}

/// Extract obligation, right, and prohibition phrases from a clause.
///
/// Each capture runs up to the next period. A phrase matched by more
/// than one trigger is reported once per trigger; duplicates are not
/// removed.
pub fn extract_obligations_rights_prohibitions(
    clause_text: &str,
) -> (Vec<String>, Vec<String>, Vec<String>) {
    let obligations = capture_after_triggers(clause_text, &OBLIGATION_PATTERNS);
    let rights = capture_after_triggers(clause_text, &RIGHT_PATTERNS);
    let prohibitions = capture_after_triggers(clause_text, &PROHIBITION_PATTERNS);
    (obligations, rights, prohibitions)
}
