//! Risk detection and scoring.
//!
//! Per clause: each risk category is tested pattern-by-pattern; the
//! first match within a category emits one [`RiskFlag`] and stops that
//! category, so a clause carries at most one flag per category but may
//! be flagged by several categories. Scores start from the category
//! base score, are reduced by co-occurring favorable language, nudged
//! by category-specific context (penalty amounts, non-compete
//! durations, notice periods), and clamped to `[0, 100]`.
//!
//! Aggregation over a whole contract is a severity-weighted average
//! with integer floor division; it is a commutative reduction, so
//! clause order never changes the overall result.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use clause_lens::{ClauseType, ContractClause};

use crate::patterns::{favorable_rules, risk_rules, RiskCategory};
use crate::policy::{RiskLevel, RiskPolicy};

/// Display truncation length for `RiskFlag::clause_text`, in chars.
const CLAUSE_TEXT_LIMIT: usize = 200;

/// First rupee amount in a clause, for penalty-size adjustment.
static RUPEE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₹\s*([\d,]+)").expect("invalid rupee amount pattern"));

/// First "<N> years" duration, for non-compete adjustment.
static YEARS_DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*years?").expect("invalid duration pattern"));

/// Explicit notice-period phrase, for termination adjustment.
static NOTICE_PERIOD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*days?\s*notice").expect("invalid notice pattern"));

/// "without ... notice" phrase, for termination adjustment.
static WITHOUT_NOTICE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"without.*notice").expect("invalid without-notice pattern"));

/// One detected risk in one clause. Immutable once created.
///
/// `clause_text` is truncated for display; the canonical link back to
/// the clause is the index key in [`RiskAnalysis::clause_risks`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    /// Clause text, truncated to 200 chars with an ellipsis
    pub clause_text: String,
    /// Detected risk category
    pub risk_type: RiskCategory,
    /// Severity derived from the adjusted score
    pub risk_level: RiskLevel,
    /// One-line description of the risk
    pub description: String,
    /// Commercial consequence in plain language
    pub business_impact: String,
    /// Which side the clause favors
    pub who_it_favors: String,
    /// Why a small business should care
    pub sme_concern: String,
    /// Adjusted score in `[0, 100]`
    pub score: u32,
}

/// Risk profile of a whole contract, derived purely from its clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Weighted-average score in `[0, 100]`
    pub overall_score: u32,
    /// Severity classification of `overall_score`
    pub overall_level: RiskLevel,
    /// Total number of flags across all clauses
    pub total_risks: usize,
    /// All flags grouped by severity (every level is present)
    pub risk_summary: BTreeMap<RiskLevel, Vec<RiskFlag>>,
    /// Flags keyed by clause index; clauses without flags are absent
    pub clause_risks: BTreeMap<usize, Vec<RiskFlag>>,
    /// Number of HIGH flags
    pub high_risk_count: usize,
    /// Number of MEDIUM flags
    pub medium_risk_count: usize,
    /// Number of LOW flags
    pub low_risk_count: usize,
}

impl RiskAnalysis {
    /// Flags detected in the clause at `index`, if any.
    pub fn risks_for_clause(&self, index: usize) -> &[RiskFlag] {
        self.clause_risks
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Legacy display key for a clause index (`"clause_3"`).
    pub fn clause_key(index: usize) -> String {
        format!("clause_{}", index)
    }
}

/// Rule-based risk scoring engine.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    policy: RiskPolicy,
}

impl RiskEngine {
    /// Engine with the default scoring policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with a custom scoring policy.
    pub fn with_policy(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    /// The scoring policy in effect.
    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    /// Detect risks in a single clause.
    ///
    /// Emits at most one flag per risk category; re-running on the
    /// same clause yields an identical flag set.
    pub fn analyze_clause_risk(
        &self,
        clause_text: &str,
        clause_type: ClauseType,
    ) -> Vec<RiskFlag> {
        let clause_lower = clause_text.to_lowercase();
        let mut flags = Vec::new();

        for rule in risk_rules() {
            let matched = rule
                .patterns
                .iter()
                .any(|pattern| pattern.is_match(&clause_lower));
            if !matched {
                continue;
            }

            let score =
                self.adjust_risk_score(rule.base_score, clause_text, &clause_lower, rule.category);
            let risk_level = self.policy.level_for(score);
            debug!(
                category = rule.category.as_str(),
                ?clause_type,
                score,
                %risk_level,
                "risk flagged"
            );

            flags.push(RiskFlag {
                clause_text: truncate_clause(clause_text),
                risk_type: rule.category,
                risk_level,
                description: rule.description.to_string(),
                business_impact: rule.business_impact.to_string(),
                who_it_favors: rule.who_it_favors.to_string(),
                sme_concern: rule.sme_concern.to_string(),
                score,
            });
        }

        flags
    }

    /// Apply favorable-language reductions and category-specific
    /// context rules, then clamp to `[0, 100]`.
    fn adjust_risk_score(
        &self,
        base_score: u32,
        clause_text: &str,
        clause_lower: &str,
        category: RiskCategory,
    ) -> u32 {
        let mut score = base_score as i64;

        // Each favorable category that matches applies its reduction
        // once; reductions across categories are cumulative.
        for rule in favorable_rules() {
            if rule.patterns.iter().any(|p| p.is_match(clause_lower)) {
                score -= rule.score_reduction as i64;
            }
        }

        match category {
            RiskCategory::PenaltyLiquidatedDamages => {
                // Small penalties matter less, very large ones more.
                // Unparseable amounts are skipped, not errors.
                if let Some(amount) = first_rupee_amount(clause_text) {
                    if amount < 10_000 {
                        score -= 15;
                    } else if amount > 1_000_000 {
                        score += 10;
                    }
                }
            }
            RiskCategory::NonCompete => {
                if let Some(years) = first_years_duration(clause_lower) {
                    if years <= 1 {
                        score -= 20;
                    } else if years >= 3 {
                        score += 15;
                    }
                }
            }
            RiskCategory::UnilateralTermination => {
                // Both checks can apply to the same clause.
                if NOTICE_PERIOD.is_match(clause_lower) {
                    score -= 10;
                }
                if WITHOUT_NOTICE.is_match(clause_lower) {
                    score += 15;
                }
            }
            _ => {}
        }

        score.clamp(0, 100) as u32
    }

    /// Weighted-average score over all flags of a contract.
    ///
    /// With no flags, returns the policy baseline at LOW. Otherwise
    /// each flag contributes `score * weight(level)` against a divisor
    /// of summed weights, floored to an integer and capped at 100.
    pub fn calculate_contract_risk_score(&self, all_risks: &[RiskFlag]) -> (u32, RiskLevel) {
        if all_risks.is_empty() {
            return (self.policy.baseline_score, RiskLevel::Low);
        }

        let mut total_score: u64 = 0;
        let mut total_weight: u64 = 0;
        for risk in all_risks {
            let weight = self.policy.weight(risk.risk_level) as u64;
            total_score += risk.score as u64 * weight;
            total_weight += weight;
        }

        // total_weight > 0 because the empty case returned above.
        let overall = ((total_score / total_weight) as u32).min(100);
        (overall, self.policy.level_for(overall))
    }

    /// Analyze every clause and aggregate into a [`RiskAnalysis`].
    ///
    /// The overall score is order-independent: permuting the clause
    /// list changes only the index keys, never the aggregate.
    pub fn analyze_contract_risks(&self, clauses: &[ContractClause]) -> RiskAnalysis {
        let mut all_risks: Vec<RiskFlag> = Vec::new();
        let mut clause_risks: BTreeMap<usize, Vec<RiskFlag>> = BTreeMap::new();

        for (index, clause) in clauses.iter().enumerate() {
            let flags = self.analyze_clause_risk(&clause.text, clause.clause_type);
            if !flags.is_empty() {
                clause_risks.insert(index, flags.clone());
            }
            all_risks.extend(flags);
        }

        let (overall_score, overall_level) = self.calculate_contract_risk_score(&all_risks);

        let mut risk_summary: BTreeMap<RiskLevel, Vec<RiskFlag>> = BTreeMap::new();
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            risk_summary.insert(level, Vec::new());
        }
        for risk in &all_risks {
            risk_summary
                .entry(risk.risk_level)
                .or_default()
                .push(risk.clone());
        }

        let high_risk_count = risk_summary[&RiskLevel::High].len();
        let medium_risk_count = risk_summary[&RiskLevel::Medium].len();
        let low_risk_count = risk_summary[&RiskLevel::Low].len();

        info!(
            overall_score,
            %overall_level,
            total_risks = all_risks.len(),
            flagged_clauses = clause_risks.len(),
            "contract risk analysis complete"
        );

        RiskAnalysis {
            overall_score,
            overall_level,
            total_risks: all_risks.len(),
            risk_summary,
            clause_risks,
            high_risk_count,
            medium_risk_count,
            low_risk_count,
        }
    }
}

/// Truncate clause text to the display limit, appending an ellipsis.
fn truncate_clause(text: &str) -> String {
    if text.chars().count() > CLAUSE_TEXT_LIMIT {
        let truncated: String = text.chars().take(CLAUSE_TEXT_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

/// First rupee amount in the clause, commas stripped. `None` when
/// absent or unparseable.
fn first_rupee_amount(clause_text: &str) -> Option<i64> {
    let caps = RUPEE_AMOUNT.captures(clause_text)?;
    caps[1].replace(',', "").parse().ok()
}

/// First "<N> years" duration in the clause.
fn first_years_duration(clause_lower: &str) -> Option<i64> {
    let caps = YEARS_DURATION.captures(clause_lower)?;
    caps[1].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_clause() {
        let short = "a short clause";
        assert_eq!(truncate_clause(short), short);

        let long = "x".repeat(250);
        let truncated = truncate_clause(&long);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_first_rupee_amount() {
        assert_eq!(
            first_rupee_amount("a penalty of ₹5,000 per breach"),
            Some(5000)
        );
        assert_eq!(first_rupee_amount("₹ 2,000,000 in damages"), Some(2_000_000));
        assert_eq!(first_rupee_amount("no amount stated"), None);
    }

    #[test]
    fn test_first_years_duration() {
        assert_eq!(first_years_duration("for a period of 3 years"), Some(3));
        assert_eq!(first_years_duration("for 1 year only"), Some(1));
        assert_eq!(first_years_duration("for six months"), None);
    }
}
