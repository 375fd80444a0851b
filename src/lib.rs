//! Rule-based legal contract analysis.
//!
//! This crate is the extraction core of Clause Lens: it turns raw
//! contract text into a structured [`ContractAnalysis`] that the risk
//! and explanation layers consume read-only.
//!
//! ## Pipeline stages
//!
//! - [`normalize_text`] - fixed-dictionary substitution for mixed-language input
//! - [`classify_contract_type`] - match-count scoring over the type tables
//! - [`extract_entities`] - optional recognizer pass plus always-on regex pass
//! - [`segment_clauses`] / [`classify_clause_type`] - clause spans and categories
//! - [`extract_obligations_rights_prohibitions`] - duty phrases per clause
//! - [`detect_ambiguity`] - vague-language phrases for review
//!
//! ## Capability seams
//!
//! Named-entity recognition is a replaceable strategy behind the
//! [`EntityRecognizer`] trait, chosen when the [`ContractAnalyzer`] is
//! constructed: [`NoOpRecognizer`] by default, or [`ModelRecognizer`]
//! wrapping any backend. Absence of a backend only reduces entity
//! yield.
//!
//! ## Example
//!
//! ```
//! use clause_lens::ContractAnalyzer;
//!
//! let analyzer = ContractAnalyzer::new();
//! let analysis = analyzer
//!     .process_contract("This Employment Agreement is made between the parties.")
//!     .unwrap();
//! assert_eq!(analysis.contract_type, "Employment Agreement");
//! ```

mod ambiguity;
mod classify;
mod clause;
mod entity;
mod normalize;
mod patterns;
mod pipeline;

pub use ambiguity::detect_ambiguity;
pub use classify::{classify_contract_type, UNKNOWN_CONTRACT_TYPE};
pub use clause::{
    classify_clause_type, extract_obligations_rights_prohibitions, segment_clauses,
    ClauseType, ContractClause,
};
pub use entity::{
    extract_entities, ContractEntity, EntityLabel, EntityRecognizer, ModelRecognizer,
    NoOpRecognizer, RecognizedSpan,
};
pub use normalize::normalize_text;
pub use pipeline::{AnalyzeError, ContractAnalysis, ContractAnalyzer};

#[cfg(test)]
mod tests {
    mod pipeline;
    mod segmentation;
}
