//! Entity extraction from contract text.
//!
//! Extraction runs two independent passes whose results are
//! concatenated without deduplication:
//!
//! 1. An optional recognizer backend (see [`EntityRecognizer`]),
//!    restricted to the general NER labels, at confidence 0.8.
//! 2. An always-on regex pass over the legal-entity tables
//!    (party, monetary, date expression, duration) at confidence 0.7.
//!
//! Overlapping or duplicate entities are accepted behavior; consumers
//! must tolerate them.

use serde::{Deserialize, Serialize};

use crate::patterns::ENTITY_PATTERNS;

/// Category vocabulary for extracted entities.
///
/// `Person` through `Gpe` are produced only by a recognizer backend;
/// `Party` through `Duration` only by the regex pass. Renaming a
/// variant is a breaking change for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// Named person (recognizer backend only)
    Person,
    /// Organization (recognizer backend only)
    Org,
    /// Monetary value (recognizer backend only)
    Money,
    /// Date (recognizer backend only)
    Date,
    /// Geopolitical entity (recognizer backend only)
    Gpe,
    /// Contracting-party phrase ("the Company", "the Lessee", ...)
    Party,
    /// Monetary amount in rupee/dollar notation
    Monetary,
    /// Date expression matched by regex
    DateExpr,
    /// Duration expression ("30 days", "three years", ...)
    Duration,
}

/// Labels a recognizer backend is allowed to contribute.
const RECOGNIZER_LABELS: &[EntityLabel] = &[
    EntityLabel::Person,
    EntityLabel::Org,
    EntityLabel::Money,
    EntityLabel::Date,
    EntityLabel::Gpe,
];

/// An entity extracted from contract text.
///
/// Offsets are byte positions into the normalized source text.
/// Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractEntity {
    /// Matched text
    pub text: String,
    /// Entity category
    pub label: EntityLabel,
    /// Start offset into the normalized source text
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
    /// Extraction confidence in `[0, 1]`
    pub confidence: f64,
}

/// A span produced by a recognizer backend, before confidence is
/// assigned by the extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedSpan {
    /// Matched text
    pub text: String,
    /// Entity category claimed by the backend
    pub label: EntityLabel,
    /// Start offset
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl RecognizedSpan {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }
}

/// Replaceable named-entity recognition capability.
///
/// The backend is selected at construction time of the analyzer; the
/// core never probes the environment. Absence of a real backend
/// ([`NoOpRecognizer`]) only reduces entity yield, never errors.
pub trait EntityRecognizer {
    /// Recognize entity spans in `text`.
    fn recognize(&self, text: &str) -> Vec<RecognizedSpan>;
}

/// Recognizer that contributes nothing. The default capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRecognizer;

impl EntityRecognizer for NoOpRecognizer {
    fn recognize(&self, _text: &str) -> Vec<RecognizedSpan> {
        Vec::new()
    }
}

/// Recognizer that wraps an arbitrary NER backend function.
pub struct ModelRecognizer {
    backend: Box<dyn Fn(&str) -> Vec<RecognizedSpan> + Send + Sync>,
}

impl ModelRecognizer {
    /// Wrap a backend function as a recognizer.
    pub fn new<F>(backend: F) -> Self
    where
        F: Fn(&str) -> Vec<RecognizedSpan> + Send + Sync + 'static,
    {
        Self {
            backend: Box::new(backend),
        }
    }
}

impl EntityRecognizer for ModelRecognizer {
    fn recognize(&self, text: &str) -> Vec<RecognizedSpan> {
        (self.backend)(text)
    }
}

impl std::fmt::Debug for ModelRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRecognizer").finish_non_exhaustive()
    }
}

/// Extract entities from `text` using the given recognizer plus the
/// always-on regex pass.
pub fn extract_entities(text: &str, recognizer: &dyn EntityRecognizer) -> Vec<ContractEntity> {
    let mut entities = Vec::new();

    // Pass 1: optional recognizer backend, constrained to the general
    // NER label set regardless of what the backend claims.
    for span in recognizer.recognize(text) {
        if RECOGNIZER_LABELS.contains(&span.label) {
            entities.push(ContractEntity {
                text: span.text,
                label: span.label,
                start: span.start,
                end: span.end,
                confidence: 0.8,
            });
        }
    }

    // Pass 2: regex matching over the legal-entity tables.
    for (label, patterns) in ENTITY_PATTERNS.iter() {
        for pattern in patterns {
            for m in pattern.find_iter(text) {
                entities.push(ContractEntity {
                    text: m.as_str().to_string(),
                    label: *label,
                    start: m.start(),
                    end: m.end(),
                    confidence: 0.7,
                });
            }
        }
    }

    entities
}
