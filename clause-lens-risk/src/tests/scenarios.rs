//! Per-clause detection and adjustment scenarios.

use clause_lens::{ClauseType, ContractClause};

use crate::engine::RiskEngine;
use crate::patterns::RiskCategory;
use crate::policy::RiskLevel;

fn engine() -> RiskEngine {
    RiskEngine::new()
}

#[test]
fn test_indemnity_and_unlimited_liability_clause() {
    let clause = "The Employee shall indemnify and hold harmless the Company from any and all \
                  damages, including unlimited liability for any losses.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Liability);

    assert_eq!(flags.len(), 2);

    let indemnity = flags
        .iter()
        .find(|f| f.risk_type == RiskCategory::Indemnity)
        .expect("indemnity flag");
    assert_eq!(indemnity.score, 80);
    assert_eq!(indemnity.risk_level, RiskLevel::High);

    let unlimited = flags
        .iter()
        .find(|f| f.risk_type == RiskCategory::UnlimitedLiability)
        .expect("unlimited liability flag");
    assert_eq!(unlimited.score, 90);
    assert_eq!(unlimited.risk_level, RiskLevel::High);
}

#[test]
fn test_high_risk_clause_aggregates_high() {
    let clause = ContractClause::from_text(
        "The Employee shall indemnify and hold harmless the Company from any and all \
         damages, including unlimited liability for any losses.",
    );
    let analysis = engine().analyze_contract_risks(std::slice::from_ref(&clause));

    // (80 * 3 + 90 * 3) / 6 = 85
    assert_eq!(analysis.overall_score, 85);
    assert_eq!(analysis.overall_level, RiskLevel::High);
    assert_eq!(analysis.high_risk_count, 2);
}

#[test]
fn test_termination_with_notice_period_is_softened() {
    let clause = "The Company may terminate this agreement at will upon providing 60 days notice.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Termination);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::UnilateralTermination);
    // base 75, explicit notice period present: -10
    assert_eq!(flags[0].score, 65);
    assert_eq!(flags[0].risk_level, RiskLevel::Medium);
}

#[test]
fn test_termination_without_notice_is_worse() {
    let clause = "The Client may terminate without cause and without notice at any time.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Termination);

    assert_eq!(flags.len(), 1);
    // base 75, "without notice" present: +15
    assert_eq!(flags[0].score, 90);
    assert_eq!(flags[0].risk_level, RiskLevel::High);
}

#[test]
fn test_notice_adjustments_apply_independently() {
    let clause = "The Client may terminate without cause either with 30 days notice \
                  or without notice entirely.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Termination);

    assert_eq!(flags.len(), 1);
    // base 75, -10 for the notice period, +15 for "without notice"
    assert_eq!(flags[0].score, 80);
}

#[test]
fn test_liability_cap_mitigates_indemnity() {
    let clause = "The Vendor shall indemnify and hold harmless the Client from third party \
                  claims, provided that total liability shall be limited to ₹50,000.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Liability);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::Indemnity);
    // base 80, limitation-of-liability match: -20
    assert_eq!(flags[0].score, 60);
    assert_eq!(flags[0].risk_level, RiskLevel::Medium);
}

#[test]
fn test_long_non_compete_scores_high() {
    let clause = "The Employee agrees to a non-compete restriction for 3 years after termination.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::NonCompete);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::NonCompete);
    // base 70, duration >= 3 years: +15
    assert_eq!(flags[0].score, 85);
    assert_eq!(flags[0].risk_level, RiskLevel::High);
}

#[test]
fn test_short_non_compete_scores_medium() {
    let clause = "The Employee agrees to a non-compete restriction for 1 year after leaving.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::NonCompete);

    assert_eq!(flags.len(), 1);
    // base 70, duration <= 1 year: -20
    assert_eq!(flags[0].score, 50);
    assert_eq!(flags[0].risk_level, RiskLevel::Medium);
}

#[test]
fn test_small_penalty_amount_is_softened() {
    let clause = "A penalty of ₹5,000 shall apply for each late delivery of goods.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Payment);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::PenaltyLiquidatedDamages);
    // base 85, amount below 10,000: -15
    assert_eq!(flags[0].score, 70);
    assert_eq!(flags[0].risk_level, RiskLevel::Medium);
}

#[test]
fn test_large_penalty_amount_is_raised() {
    let clause = "A penalty of ₹2,000,000 applies in case of breach of this agreement.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Payment);

    assert_eq!(flags.len(), 1);
    // base 85, amount above 1,000,000: +10
    assert_eq!(flags[0].score, 95);
    assert_eq!(flags[0].risk_level, RiskLevel::High);
}

#[test]
fn test_at_most_one_flag_per_category() {
    // Two indemnity patterns match, one flag results.
    let clause = "The Supplier shall indemnify and hold harmless the Buyer, with \
                  indemnification for all its losses.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Liability);
    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::Indemnity);
}

#[test]
fn test_rerun_yields_identical_flags() {
    let clause = "The Employee shall indemnify and hold harmless the Company from any and all \
                  damages, including unlimited liability for any losses.";
    let first = engine().analyze_clause_risk(clause, ClauseType::Liability);
    let second = engine().analyze_clause_risk(clause, ClauseType::Liability);
    assert_eq!(first, second);
}

#[test]
fn test_scores_stay_within_bounds() {
    let clauses = [
        "A penalty of ₹2,000,000 applies in case of breach of this agreement.",
        "The Client may terminate without cause and without notice at any time.",
        "The Employee agrees to a non-compete restriction for 1 year after leaving, \
         subject to force majeure and circumstances beyond the reasonable control of either party.",
    ];
    for clause in clauses {
        for flag in engine().analyze_clause_risk(clause, ClauseType::General) {
            assert!(flag.score <= 100, "score out of bounds: {}", flag.score);
        }
    }
}

#[test]
fn test_unparseable_amount_is_ignored() {
    // "₹ ," captures only a comma, which does not parse; no adjustment.
    let clause = "A penalty of ₹ , as may be notified, applies for delayed delivery of goods.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::Payment);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].risk_type, RiskCategory::PenaltyLiquidatedDamages);
    assert_eq!(flags[0].score, 85);
}

#[test]
fn test_clause_text_is_truncated_on_flag() {
    let filler = "and shall keep the Client informed of progress at all times ".repeat(5);
    let clause = format!("The Supplier shall indemnify and hold harmless the Client {}", filler);
    let flags = engine().analyze_clause_risk(&clause, ClauseType::Liability);

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].clause_text.chars().count(), 203);
    assert!(flags[0].clause_text.ends_with("..."));
}

#[test]
fn test_clean_clause_has_no_flags() {
    let clause = "The parties shall meet quarterly to review the progress of the project.";
    let flags = engine().analyze_clause_risk(clause, ClauseType::General);
    assert!(flags.is_empty());
}
