//! Explanation adapter boundary for Clause Lens.
//!
//! The analysis core produces structured aggregates; turning them into
//! natural-language text is the job of an external text-generation
//! service. This crate defines the data contract that service consumes
//! ([`ClauseExplanationRequest`], [`RiskExplanationRequest`],
//! [`ExecutiveSummaryRequest`]), the [`Explainer`] strategy trait, and
//! a deterministic [`TemplateExplainer`] fallback so the absence of a
//! generation backend never becomes a hard failure.
//!
//! ## Example
//!
//! ```
//! use clause_lens_explain::{ExecutiveSummaryRequest, Explainer, TemplateExplainer};
//! use clause_lens_risk::RiskLevel;
//!
//! let request = ExecutiveSummaryRequest {
//!     contract_type: "Service Agreement".to_string(),
//!     overall_score: 20,
//!     overall_level: RiskLevel::Low,
//!     high_risk_count: 0,
//!     medium_risk_count: 0,
//!     low_risk_count: 0,
//!     clause_count: 3,
//! };
//! let summary = TemplateExplainer::new().executive_summary(&request).unwrap();
//! assert!(summary.contains("Service Agreement"));
//! ```

mod request;
mod template;

pub use request::{
    ClauseExplanation, ClauseExplanationRequest, ExecutiveSummaryRequest, RiskExplanationRequest,
};
pub use template::TemplateExplainer;

use serde::Serialize;
use thiserror::Error;

/// Errors from an explanation backend.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// The backend failed or returned unusable output.
    #[error("explanation backend failed: {message}")]
    Backend {
        /// Backend-supplied failure description
        message: String,
    },
    /// A request or response could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Replaceable text-generation strategy.
///
/// Implementations must be synchronous from the caller's point of
/// view; a networked backend wraps its own transport. The default is
/// [`TemplateExplainer`], which never fails.
pub trait Explainer {
    /// Explain one clause in plain language.
    fn explain_clause(
        &self,
        request: &ClauseExplanationRequest,
    ) -> Result<ClauseExplanation, ExplainError>;

    /// Explain one detected risk in plain language.
    fn explain_risk(&self, request: &RiskExplanationRequest) -> Result<String, ExplainError>;

    /// Summarize a full analysis for an executive reader.
    fn executive_summary(
        &self,
        request: &ExecutiveSummaryRequest,
    ) -> Result<String, ExplainError>;
}

/// Serialize any request or response for transport to a remote
/// backend or a presentation layer.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, ExplainError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clause_lens::ClauseType;

    #[test]
    fn test_requests_serialize_to_json() {
        let request = ClauseExplanationRequest {
            clause_text: "The Employee shall report monthly.".to_string(),
            clause_type: ClauseType::General,
            contract_type: "Employment Agreement".to_string(),
        };
        let json = to_json(&request).unwrap();
        assert!(json.contains("\"clause_type\":\"GENERAL\""));
        assert!(json.contains("Employment Agreement"));
    }

    #[test]
    fn test_risk_analysis_serializes_with_level_keys() {
        use clause_lens::ContractClause;
        use clause_lens_risk::RiskEngine;

        let clause = ContractClause::from_text(
            "The Supplier shall have unlimited liability for all losses arising hereunder.",
        );
        let analysis = RiskEngine::new().analyze_contract_risks(std::slice::from_ref(&clause));
        let json = to_json(&analysis).unwrap();

        assert!(json.contains("\"HIGH\""));
        assert!(json.contains("\"overall_score\":90"));
    }
}
