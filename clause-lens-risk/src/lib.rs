//! Risk detection and scoring engine for Clause Lens.
//!
//! Consumes the clauses of a [`clause_lens::ContractAnalysis`] and
//! produces a [`RiskAnalysis`]: per-clause [`RiskFlag`]s from the ten
//! risk pattern categories, contextual score adjustments, and a
//! severity-weighted overall score.
//!
//! ## Components
//!
//! - [`RiskEngine`] - per-clause detection and contract aggregation
//! - [`RiskPolicy`] - named thresholds, weights, and baseline
//! - [`risk_rules`] / [`favorable_rules`] - the static pattern tables
//! - [`recommend`] - action buckets derived from the flags
//!
//! ## Example
//!
//! ```
//! use clause_lens::ContractClause;
//! use clause_lens_risk::{RiskEngine, RiskLevel};
//!
//! let clause = ContractClause::from_text(
//!     "The Supplier shall have unlimited liability for all losses.",
//! );
//! let engine = RiskEngine::new();
//! let analysis = engine.analyze_contract_risks(std::slice::from_ref(&clause));
//! assert_eq!(analysis.overall_level, RiskLevel::High);
//! ```

mod engine;
mod patterns;
mod policy;
mod recommend;

pub use engine::{RiskAnalysis, RiskEngine, RiskFlag};
pub use patterns::{favorable_rules, risk_rules, FavorableCategory, FavorableRule, RiskCategory, RiskRule};
pub use policy::{RiskLevel, RiskPolicy};
pub use recommend::{recommend, RecommendationSet};
