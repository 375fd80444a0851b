//! Contract processing pipeline.
//!
//! [`ContractAnalyzer`] orchestrates normalization, contract-type
//! classification, entity extraction, clause segmentation, and
//! ambiguity detection into a single [`ContractAnalysis`] value.
//! Processing is a pure, synchronous text transformation: no I/O, no
//! shared mutable state, safe to run in parallel across documents.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::ambiguity::detect_ambiguity;
use crate::classify::classify_contract_type;
use crate::clause::{segment_clauses, ContractClause};
use crate::entity::{extract_entities, ContractEntity, EntityRecognizer, NoOpRecognizer};
use crate::normalize::normalize_text;

/// Errors from the analysis boundary.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The ingestion collaborator handed over no analyzable text.
    #[error("document contains no analyzable text")]
    EmptyDocument,
}

/// Full structured analysis of one contract document.
///
/// Produced once per document and consumed read-only downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractAnalysis {
    /// Classified contract type, or `"Unknown"`
    pub contract_type: String,
    /// Classification confidence in `[0, 1]`
    pub type_confidence: f64,
    /// Extracted entities (may overlap or duplicate)
    pub entities: Vec<ContractEntity>,
    /// Segmented and classified clauses, in document order
    pub clauses: Vec<ContractClause>,
    /// Detected vague-language phrases, deduplicated
    pub ambiguities: Vec<String>,
}

/// Contract analysis pipeline with a pluggable entity recognizer.
///
/// The recognizer capability is fixed at construction; the default is
/// [`NoOpRecognizer`], which degrades extraction to the regex pass
/// without changing error behavior.
pub struct ContractAnalyzer {
    recognizer: Box<dyn EntityRecognizer + Send + Sync>,
}

impl Default for ContractAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractAnalyzer {
    /// Analyzer with no recognizer backend (regex extraction only).
    pub fn new() -> Self {
        Self {
            recognizer: Box::new(NoOpRecognizer),
        }
    }

    /// Analyzer with the given recognizer backend.
    pub fn with_recognizer(recognizer: Box<dyn EntityRecognizer + Send + Sync>) -> Self {
        Self { recognizer }
    }

    /// Run the full pipeline over raw contract text.
    ///
    /// Returns [`AnalyzeError::EmptyDocument`] for empty or
    /// whitespace-only input; every other irregularity degrades to a
    /// smaller result rather than an error.
    pub fn process_contract(&self, text: &str) -> Result<ContractAnalysis, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyDocument);
        }

        let normalized = normalize_text(text);

        let (contract_type, type_confidence) = classify_contract_type(&normalized);
        debug!(contract_type, type_confidence, "contract type classified");

        let entities = extract_entities(&normalized, self.recognizer.as_ref());

        let clauses: Vec<ContractClause> = segment_clauses(&normalized)
            .into_iter()
            .map(ContractClause::from_text)
            .collect();

        let ambiguities = detect_ambiguity(&normalized);

        info!(
            contract_type,
            clauses = clauses.len(),
            entities = entities.len(),
            ambiguities = ambiguities.len(),
            "contract processing complete"
        );

        Ok(ContractAnalysis {
            contract_type: contract_type.to_string(),
            type_confidence,
            entities,
            clauses,
            ambiguities,
        })
    }
}

impl std::fmt::Debug for ContractAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractAnalyzer").finish_non_exhaustive()
    }
}
