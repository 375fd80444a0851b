//! Severity levels and scoring policy.
//!
//! The thresholds and weights here are policy constants, exposed as
//! named configuration so the boundary behavior stays independently
//! testable rather than buried in the engine.

use serde::{Deserialize, Serialize};

/// Severity of a detected risk, or of a whole contract.
///
/// Ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Score 0-30
    Low,
    /// Score 31-70
    Medium,
    /// Score 71-100
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
        }
    }
}

/// Scoring policy: level thresholds, severity weights, and the
/// baseline for contracts with no detected risks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Highest score still classified LOW
    pub low_ceiling: u32,
    /// Highest score still classified MEDIUM
    pub medium_ceiling: u32,
    /// Aggregation weight for HIGH flags
    pub high_weight: u32,
    /// Aggregation weight for MEDIUM flags
    pub medium_weight: u32,
    /// Aggregation weight for LOW flags
    pub low_weight: u32,
    /// Overall score when no risks were detected
    pub baseline_score: u32,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            low_ceiling: 30,
            medium_ceiling: 70,
            high_weight: 3,
            medium_weight: 2,
            low_weight: 1,
            baseline_score: 20,
        }
    }
}

impl RiskPolicy {
    /// Classify a 0-100 score into a severity level.
    pub fn level_for(&self, score: u32) -> RiskLevel {
        if score > self.medium_ceiling {
            RiskLevel::High
        } else if score > self.low_ceiling {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Aggregation weight for a severity level.
    pub fn weight(&self, level: RiskLevel) -> u32 {
        match level {
            RiskLevel::High => self.high_weight,
            RiskLevel::Medium => self.medium_weight,
            RiskLevel::Low => self.low_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        let policy = RiskPolicy::default();
        assert_eq!(policy.level_for(0), RiskLevel::Low);
        assert_eq!(policy.level_for(30), RiskLevel::Low);
        assert_eq!(policy.level_for(31), RiskLevel::Medium);
        assert_eq!(policy.level_for(70), RiskLevel::Medium);
        assert_eq!(policy.level_for(71), RiskLevel::High);
        assert_eq!(policy.level_for(100), RiskLevel::High);
    }

    #[test]
    fn test_default_weights() {
        let policy = RiskPolicy::default();
        assert_eq!(policy.weight(RiskLevel::High), 3);
        assert_eq!(policy.weight(RiskLevel::Medium), 2);
        assert_eq!(policy.weight(RiskLevel::Low), 1);
    }

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }
}
