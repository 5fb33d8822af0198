//! Rule-table presets — weights and confidence-shaping constants.
//!
//! Weights follow assumed reliability: RSI extremes and MACD crossovers
//! highest (6), smart-money proximity next (5), trend alignment and sweeps
//! (4), secondary indicator context (3), pivot/volume/session lowest (2).
//! The basic preset disables the session rule (weight 0).

use crate::config::RuleSetChoice;
use serde::{Deserialize, Serialize};

/// Point weight per rule family. A zero weight disables the rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleWeights {
    pub rsi_extreme: f64,
    pub macd_cross: f64,
    pub ema_trend: f64,
    pub bollinger_touch: f64,
    pub adx_directional: f64,
    pub fvg_proximity: f64,
    pub order_block_proximity: f64,
    pub liquidity_sweep: f64,
    pub microstructure_bias: f64,
    pub pivot_side: f64,
    pub volume_context: f64,
    pub session_context: f64,
}

/// A complete scoring preset: rule weights, RSI bands, and the confidence
/// boost/floor/clamp constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    pub weights: RuleWeights,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    /// Confidence added per confluence point, capped by `boost_cap`.
    pub boost_factor: f64,
    pub boost_cap: f64,
    /// Confidence is raised to this floor once confluence reaches `floor_trigger`.
    pub confidence_floor: f64,
    pub floor_trigger: f64,
    pub confidence_max: f64,
}

impl RuleSet {
    pub fn basic() -> Self {
        Self {
            weights: RuleWeights {
                rsi_extreme: 6.0,
                macd_cross: 6.0,
                ema_trend: 4.0,
                bollinger_touch: 3.0,
                adx_directional: 3.0,
                fvg_proximity: 5.0,
                order_block_proximity: 5.0,
                liquidity_sweep: 4.0,
                microstructure_bias: 3.0,
                pivot_side: 2.0,
                volume_context: 2.0,
                session_context: 0.0,
            },
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            boost_factor: 0.5,
            boost_cap: 10.0,
            confidence_floor: 50.0,
            floor_trigger: 8.0,
            confidence_max: 95.0,
        }
    }

    pub fn enhanced() -> Self {
        Self {
            weights: RuleWeights {
                session_context: 2.0,
                ..Self::basic().weights
            },
            boost_factor: 1.0,
            boost_cap: 20.0,
            confidence_floor: 60.0,
            floor_trigger: 12.0,
            confidence_max: 100.0,
            ..Self::basic()
        }
    }

    pub fn for_choice(choice: RuleSetChoice) -> Self {
        match choice {
            RuleSetChoice::Basic => Self::basic(),
            RuleSetChoice::Enhanced => Self::enhanced(),
        }
    }
}
