//! Deterministic template fallback.
//!
//! Used when no text-generation backend is configured. Output is
//! assembled purely from the structured analysis data, so it is
//! reproducible and never blocks on anything external. The templates
//! speak to a business owner, not a lawyer, and always point the
//! reader to qualified review for anything consequential.

use crate::request::{
    ClauseExplanation, ClauseExplanationRequest, ExecutiveSummaryRequest, RiskExplanationRequest,
};
use crate::{ExplainError, Explainer};

use clause_lens::ClauseType;
use clause_lens_risk::RiskLevel;

/// Explainer that fills fixed templates from structured data.
///
/// The default strategy; an LLM-backed explainer can replace it
/// without the core noticing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateExplainer;

impl TemplateExplainer {
    /// New template explainer.
    pub fn new() -> Self {
        Self
    }
}

fn clause_type_summary(clause_type: ClauseType) -> &'static str {
    match clause_type {
        ClauseType::Termination => "sets out how and when this agreement can be ended",
        ClauseType::Payment => "sets out what is paid, how much, and when",
        ClauseType::Liability => "allocates responsibility for losses and damages",
        ClauseType::Confidentiality => "restricts what information can be shared",
        ClauseType::IntellectualProperty => "decides who owns work products and ideas",
        ClauseType::NonCompete => "restricts future business or employment activities",
        ClauseType::General => "records a general term of the agreement",
    }
}

impl Explainer for TemplateExplainer {
    fn explain_clause(
        &self,
        request: &ClauseExplanationRequest,
    ) -> Result<ClauseExplanation, ExplainError> {
        Ok(ClauseExplanation {
            simple_explanation: format!(
                "This clause {} in your {}.",
                clause_type_summary(request.clause_type),
                request.contract_type
            ),
            who_benefits: "Not determined without detailed review.".to_string(),
            business_impact: format!(
                "Terms of this kind shape your obligations day to day; read the clause \
                 text carefully: \"{}\"",
                request.clause_text
            ),
            watch_out_for: "Vague wording, one-sided duties, and missing limits.".to_string(),
            assessment: "Automated explanation unavailable; this clause requires manual review. \
                         Please consult a qualified lawyer before relying on it."
                .to_string(),
        })
    }

    fn explain_risk(&self, request: &RiskExplanationRequest) -> Result<String, ExplainError> {
        let risk = &request.risk;
        Ok(format!(
            "{} ({} risk, score {}/100). {}. This tends to favor: {}. Why it matters for a \
             small business: {}. Please have a qualified lawyer review this clause.",
            risk.description,
            risk.risk_level,
            risk.score,
            risk.business_impact,
            risk.who_it_favors,
            risk.sme_concern
        ))
    }

    fn executive_summary(
        &self,
        request: &ExecutiveSummaryRequest,
    ) -> Result<String, ExplainError> {
        let urgency = match request.overall_level {
            RiskLevel::High => "Address the flagged items before signing.",
            RiskLevel::Medium => "Negotiate the flagged items where possible.",
            RiskLevel::Low => "No urgent issues were detected.",
        };
        Ok(format!(
            "Contract type: {}. Overall risk score: {}/100 ({}). {} clauses were analyzed, \
             with {} high, {} medium, and {} low severity findings. {} This summary is \
             generated from pattern analysis and is not legal advice.",
            request.contract_type,
            request.overall_score,
            request.overall_level,
            request.clause_count,
            request.high_risk_count,
            request.medium_risk_count,
            request.low_risk_count,
            urgency
        ))
    }
}
