//! Data contract between the analysis core and a text-generation
//! service.
//!
//! These are the only inputs an explanation backend may rely on: the
//! structured analysis results, consumed read-only. Everything is
//! serde-serializable so a remote backend can receive requests as
//! JSON.

use serde::{Deserialize, Serialize};

use clause_lens::{ClauseType, ContractAnalysis};
use clause_lens_risk::{RiskAnalysis, RiskFlag, RiskLevel};

/// Request for a plain-language explanation of one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseExplanationRequest {
    /// Clause text to explain
    pub clause_text: String,
    /// Classified clause category
    pub clause_type: ClauseType,
    /// Classified contract type, for context
    pub contract_type: String,
}

/// Structured explanation of one clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseExplanation {
    /// What the clause means in plain business terms
    pub simple_explanation: String,
    /// Which party the clause favors
    pub who_benefits: String,
    /// How it could affect day-to-day operations
    pub business_impact: String,
    /// What the reader should be careful about
    pub watch_out_for: String,
    /// Whether the clause is typical, aggressive, or unfavorable
    pub assessment: String,
}

/// Request for a plain-language explanation of one detected risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskExplanationRequest {
    /// Clause text the risk was found in
    pub clause_text: String,
    /// The detected risk
    pub risk: RiskFlag,
}

/// Request for an executive summary of a full analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummaryRequest {
    /// Classified contract type
    pub contract_type: String,
    /// Weighted-average risk score
    pub overall_score: u32,
    /// Severity classification of the overall score
    pub overall_level: RiskLevel,
    /// Number of HIGH flags
    pub high_risk_count: usize,
    /// Number of MEDIUM flags
    pub medium_risk_count: usize,
    /// Number of LOW flags
    pub low_risk_count: usize,
    /// Number of clauses analyzed
    pub clause_count: usize,
}

impl ExecutiveSummaryRequest {
    /// Assemble a summary request from the two analysis aggregates.
    pub fn from_analyses(contract: &ContractAnalysis, risks: &RiskAnalysis) -> Self {
        Self {
            contract_type: contract.contract_type.clone(),
            overall_score: risks.overall_score,
            overall_level: risks.overall_level,
            high_risk_count: risks.high_risk_count,
            medium_risk_count: risks.medium_risk_count,
            low_risk_count: risks.low_risk_count,
            clause_count: contract.clauses.len(),
        }
    }
}
