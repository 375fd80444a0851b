//! Action recommendations for detected risks.
//!
//! Buckets flags into the actions a business owner should take next.
//! HIGH-severity unlimited-liability and personal-guarantee flags are
//! escalated to immediate attention plus legal review.

use serde::{Deserialize, Serialize};

use crate::engine::RiskFlag;
use crate::patterns::RiskCategory;
use crate::policy::RiskLevel;

/// Categories that escalate straight to immediate attention when HIGH.
const CRITICAL_CATEGORIES: &[RiskCategory] = &[
    RiskCategory::UnlimitedLiability,
    RiskCategory::PersonalGuarantee,
];

/// Recommended actions, bucketed by urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Critical items that cannot wait
    pub immediate_attention: Vec<String>,
    /// Terms worth renegotiating
    pub negotiate_changes: Vec<String>,
    /// Clauses a lawyer should look at
    pub seek_legal_review: Vec<String>,
    /// Obligations to track during the contract
    pub monitor_compliance: Vec<String>,
}

impl RecommendationSet {
    /// True when no bucket holds any recommendation.
    pub fn is_empty(&self) -> bool {
        self.immediate_attention.is_empty()
            && self.negotiate_changes.is_empty()
            && self.seek_legal_review.is_empty()
            && self.monitor_compliance.is_empty()
    }
}

/// Build recommendations from detected risk flags.
pub fn recommend(risks: &[RiskFlag]) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    for risk in risks {
        match risk.risk_level {
            RiskLevel::High => {
                if CRITICAL_CATEGORIES.contains(&risk.risk_type) {
                    set.immediate_attention.push(format!(
                        "CRITICAL: {} - {}",
                        risk.description, risk.sme_concern
                    ));
                    set.seek_legal_review.push(format!(
                        "Have lawyer review {} clause",
                        risk.risk_type.display_name()
                    ));
                } else {
                    set.negotiate_changes.push(format!(
                        "Negotiate to modify or remove {}",
                        risk.description.to_lowercase()
                    ));
                }
            }
            RiskLevel::Medium => {
                set.negotiate_changes.push(format!(
                    "Consider negotiating {} terms",
                    risk.description.to_lowercase()
                ));
            }
            RiskLevel::Low => {
                set.monitor_compliance.push(format!(
                    "Monitor compliance with {}",
                    risk.description.to_lowercase()
                ));
            }
        }
    }

    set
}
