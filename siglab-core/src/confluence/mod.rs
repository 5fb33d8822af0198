//! Confluence scoring — weighted rule evaluation over the latest readings.
//!
//! One engine, two rule-table presets (basic and enhanced). Rules are
//! independent and each fires at most once per evaluation; ordering affects
//! only the reason list, never the score.

pub mod engine;
pub mod rules;

pub use engine::{evaluate, ConfluenceInputs};
pub use rules::{RuleSet, RuleWeights};

use serde::{Deserialize, Serialize};

/// The engine's output: directional tallies, a bounded confidence, the
/// unbounded confluence sum, and one human-readable reason per fired rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfluenceResult {
    pub bullish_score: f64,
    pub bearish_score: f64,
    /// Always within [0, 100].
    pub confidence: f64,
    /// Unbounded sum of fired rule weights (both directions plus context).
    pub confluence_score: f64,
    pub reasons: Vec<String>,
}

impl ConfluenceResult {
    /// Signed directional margin; positive means bullish.
    pub fn margin(&self) -> f64 {
        self.bullish_score - self.bearish_score
    }
}
