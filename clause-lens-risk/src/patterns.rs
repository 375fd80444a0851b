//! Static risk and favorable-clause pattern tables.
//!
//! Pure configuration: for each risk category an ordered list of
//! case-insensitive patterns, a base score, and fixed descriptive
//! strings; for each favorable category, patterns and a score
//! reduction. Categories, scores, and reductions are
//! behavior-defining and must not drift. Declaration order is the
//! canonical evaluation order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The ten risk categories the engine detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// Penalty or liquidated-damages clause
    PenaltyLiquidatedDamages,
    /// Indemnity in favor of the other party
    Indemnity,
    /// One-sided termination rights
    UnilateralTermination,
    /// Fixed arbitration or jurisdiction venue
    ArbitrationJurisdiction,
    /// Automatic renewal
    AutoRenewal,
    /// Non-compete or restraint of trade
    NonCompete,
    /// Intellectual-property assignment
    IpAssignment,
    /// Uncapped liability
    UnlimitedLiability,
    /// Exclusive supplier/customer arrangement
    ExclusiveDealing,
    /// Personal guarantee by an individual
    PersonalGuarantee,
}

impl RiskCategory {
    /// Stable wire name, e.g. `UNLIMITED_LIABILITY`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::PenaltyLiquidatedDamages => "PENALTY_LIQUIDATED_DAMAGES",
            RiskCategory::Indemnity => "INDEMNITY",
            RiskCategory::UnilateralTermination => "UNILATERAL_TERMINATION",
            RiskCategory::ArbitrationJurisdiction => "ARBITRATION_JURISDICTION",
            RiskCategory::AutoRenewal => "AUTO_RENEWAL",
            RiskCategory::NonCompete => "NON_COMPETE",
            RiskCategory::IpAssignment => "IP_ASSIGNMENT",
            RiskCategory::UnlimitedLiability => "UNLIMITED_LIABILITY",
            RiskCategory::ExclusiveDealing => "EXCLUSIVE_DEALING",
            RiskCategory::PersonalGuarantee => "PERSONAL_GUARANTEE",
        }
    }

    /// Human-friendly lowercase form, e.g. `unlimited liability`.
    pub fn display_name(&self) -> String {
        self.as_str().to_lowercase().replace('_', " ")
    }
}

/// Detection rule for one risk category.
#[derive(Debug)]
pub struct RiskRule {
    /// Category this rule detects
    pub category: RiskCategory,
    /// Patterns tried in order; first match flags the clause
    pub patterns: Vec<Regex>,
    /// Score before contextual adjustment
    pub base_score: u32,
    /// One-line description of the risk
    pub description: &'static str,
    /// Commercial consequence in plain language
    pub business_impact: &'static str,
    /// Which side the clause favors
    pub who_it_favors: &'static str,
    /// Why a small business should care
    pub sme_concern: &'static str,
}

/// Mitigating-language categories that reduce risk scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FavorableCategory {
    /// Liability cap
    LimitationLiability,
    /// Mutual termination rights with notice
    MutualTermination,
    /// Force majeure protection
    ForceMajeure,
}

/// Mitigation rule for one favorable category.
#[derive(Debug)]
pub struct FavorableRule {
    /// Category this rule detects
    pub category: FavorableCategory,
    /// Patterns; any match applies the reduction once
    pub patterns: Vec<Regex>,
    /// Points subtracted from a co-occurring risk score
    pub score_reduction: u32,
    /// One-line description
    pub description: &'static str,
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("invalid pattern in risk table"))
        .collect()
}

/// The risk rules, in canonical evaluation order.
pub fn risk_rules() -> &'static [RiskRule] {
    static RULES: Lazy<Vec<RiskRule>> = Lazy::new(|| {
        vec![
            RiskRule {
                category: RiskCategory::PenaltyLiquidatedDamages,
                patterns: compile(&[
                    r"penalty.*₹?\s*[\d,]+",
                    r"liquidated damages.*₹?\s*[\d,]+",
                    r"forfeit.*₹?\s*[\d,]+",
                    r"damages.*₹?\s*[\d,]+.*per day",
                    r"penalty.*percentage.*contract value",
                ]),
                base_score: 85,
                description: "Penalty or liquidated damages clause",
                business_impact: "Financial penalties for delays or breaches",
                who_it_favors: "Other party (client/vendor)",
                sme_concern: "Can result in significant unexpected costs",
            },
            RiskRule {
                category: RiskCategory::Indemnity,
                patterns: compile(&[
                    r"indemnify.*harmless",
                    r"indemnification.*losses",
                    r"hold.*harmless.*damages",
                    r"defend.*indemnify.*hold harmless",
                    r"unlimited.*indemnity",
                ]),
                base_score: 80,
                description: "Indemnity clause requiring protection of other party",
                business_impact: "Liability for third-party claims and damages",
                who_it_favors: "Other party being indemnified",
                sme_concern: "Unlimited liability exposure beyond your control",
            },
            RiskRule {
                category: RiskCategory::UnilateralTermination,
                patterns: compile(&[
                    r"terminate.*without cause",
                    r"terminate.*at will",
                    r"terminate.*sole discretion",
                    r"terminate.*without notice",
                    r"immediate termination.*breach",
                ]),
                base_score: 75,
                description: "Unilateral termination rights",
                business_impact: "Contract can be ended without mutual agreement",
                who_it_favors: "Party with termination rights",
                sme_concern: "Loss of business continuity and planning certainty",
            },
            RiskRule {
                category: RiskCategory::ArbitrationJurisdiction,
                patterns: compile(&[
                    r"arbitration.*[A-Za-z\s]+(delhi|mumbai|bangalore|chennai|kolkata)",
                    r"jurisdiction.*courts.*[A-Za-z\s]+(delhi|mumbai|bangalore|chennai|kolkata)",
                    r"disputes.*resolved.*[A-Za-z\s]+(delhi|mumbai|bangalore|chennai|kolkata)",
                    r"exclusive jurisdiction.*[A-Za-z\s]+(delhi|mumbai|bangalore|chennai|kolkata)",
                ]),
                base_score: 60,
                description: "Jurisdiction or arbitration location clause",
                business_impact: "Legal disputes must be resolved in specific location",
                who_it_favors: "Party in the specified jurisdiction",
                sme_concern: "Additional travel and legal costs for dispute resolution",
            },
            RiskRule {
                category: RiskCategory::AutoRenewal,
                patterns: compile(&[
                    r"automatically.*renew",
                    r"auto.*renewal",
                    r"extend.*automatically",
                    r"renew.*unless.*notice.*\d+.*days",
                    r"evergreen.*clause",
                ]),
                base_score: 65,
                description: "Automatic renewal clause",
                business_impact: "Contract continues without active decision",
                who_it_favors: "Service provider or vendor",
                sme_concern: "Difficulty exiting unfavorable agreements",
            },
            RiskRule {
                category: RiskCategory::NonCompete,
                patterns: compile(&[
                    r"non.compete.*\d+.*years?",
                    r"restraint.*trade.*\d+.*years?",
                    r"not.*compete.*business.*\d+.*years?",
                    r"solicit.*employees.*\d+.*years?",
                    r"solicit.*customers.*\d+.*years?",
                ]),
                base_score: 70,
                description: "Non-compete or restraint clause",
                business_impact: "Restrictions on business activities after contract ends",
                who_it_favors: "Other party seeking protection",
                sme_concern: "Limits future business opportunities and growth",
            },
            RiskRule {
                category: RiskCategory::IpAssignment,
                patterns: compile(&[
                    r"intellectual property.*assign",
                    r"work.*hire.*ownership",
                    r"copyright.*assign.*company",
                    r"inventions.*belong.*company",
                    r"waive.*moral rights",
                ]),
                base_score: 75,
                description: "Intellectual property assignment",
                business_impact: "Loss of ownership of created work or inventions",
                who_it_favors: "Party receiving IP rights",
                sme_concern: "Loss of valuable intellectual assets and future revenue",
            },
            RiskRule {
                category: RiskCategory::UnlimitedLiability,
                patterns: compile(&[
                    r"unlimited.*liability",
                    r"liability.*not.*limited",
                    r"full.*liability.*damages",
                    r"liable.*all.*losses",
                    r"no.*cap.*liability",
                ]),
                base_score: 90,
                description: "Unlimited liability clause",
                business_impact: "No limit on financial exposure for damages",
                who_it_favors: "Other party seeking compensation",
                sme_concern: "Catastrophic financial risk beyond business capacity",
            },
            RiskRule {
                category: RiskCategory::ExclusiveDealing,
                patterns: compile(&[
                    r"exclusive.*supplier",
                    r"sole.*vendor",
                    r"exclusively.*purchase",
                    r"not.*engage.*competitors",
                    r"exclusive.*distribution",
                ]),
                base_score: 65,
                description: "Exclusive dealing arrangement",
                business_impact: "Restriction to single supplier or customer",
                who_it_favors: "Exclusive partner",
                sme_concern: "Loss of negotiating power and market flexibility",
            },
            RiskRule {
                category: RiskCategory::PersonalGuarantee,
                patterns: compile(&[
                    r"personal.*guarantee",
                    r"director.*guarantee",
                    r"personally.*liable",
                    r"individual.*guarantee",
                    r"personal.*surety",
                ]),
                base_score: 85,
                description: "Personal guarantee requirement",
                business_impact: "Personal assets at risk for business obligations",
                who_it_favors: "Creditor or service provider",
                sme_concern: "Personal financial exposure beyond business assets",
            },
        ]
    });
    &RULES
}

/// The favorable (mitigating) rules, in canonical order.
pub fn favorable_rules() -> &'static [FavorableRule] {
    static RULES: Lazy<Vec<FavorableRule>> = Lazy::new(|| {
        vec![
            FavorableRule {
                category: FavorableCategory::LimitationLiability,
                patterns: compile(&[
                    r"liability.*limited.*₹?\s*[\d,]+",
                    r"maximum.*liability.*₹?\s*[\d,]+",
                    r"cap.*liability.*₹?\s*[\d,]+",
                    r"liability.*not.*exceed.*contract value",
                ]),
                score_reduction: 20,
                description: "Liability limitation clause",
            },
            FavorableRule {
                category: FavorableCategory::MutualTermination,
                patterns: compile(&[
                    r"either party.*terminate.*\d+.*days.*notice",
                    r"mutual.*termination",
                    r"terminate.*\d+.*days.*written notice",
                ]),
                score_reduction: 15,
                description: "Mutual termination rights",
            },
            FavorableRule {
                category: FavorableCategory::ForceMajeure,
                patterns: compile(&[
                    r"force majeure",
                    r"act of god",
                    r"circumstances beyond.*control",
                    r"pandemic.*epidemic.*force majeure",
                ]),
                score_reduction: 10,
                description: "Force majeure protection",
            },
        ]
    });
    &RULES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile_and_have_fixed_shape() {
        assert_eq!(risk_rules().len(), 10);
        assert_eq!(favorable_rules().len(), 3);
        for rule in risk_rules() {
            assert!(!rule.patterns.is_empty());
            assert!(rule.base_score <= 100);
        }
    }

    #[test]
    fn test_base_scores_are_fixed() {
        let by_category = |category: RiskCategory| {
            risk_rules()
                .iter()
                .find(|r| r.category == category)
                .unwrap()
                .base_score
        };
        assert_eq!(by_category(RiskCategory::PenaltyLiquidatedDamages), 85);
        assert_eq!(by_category(RiskCategory::Indemnity), 80);
        assert_eq!(by_category(RiskCategory::UnilateralTermination), 75);
        assert_eq!(by_category(RiskCategory::ArbitrationJurisdiction), 60);
        assert_eq!(by_category(RiskCategory::AutoRenewal), 65);
        assert_eq!(by_category(RiskCategory::NonCompete), 70);
        assert_eq!(by_category(RiskCategory::IpAssignment), 75);
        assert_eq!(by_category(RiskCategory::UnlimitedLiability), 90);
        assert_eq!(by_category(RiskCategory::ExclusiveDealing), 65);
        assert_eq!(by_category(RiskCategory::PersonalGuarantee), 85);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(
            RiskCategory::PenaltyLiquidatedDamages.as_str(),
            "PENALTY_LIQUIDATED_DAMAGES"
        );
        assert_eq!(
            RiskCategory::UnlimitedLiability.display_name(),
            "unlimited liability"
        );
    }
}
