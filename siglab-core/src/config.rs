//! Strategy configuration — flat threshold record with named presets.
//!
//! Loaded from TOML by callers (the core never touches files) and hashed with
//! blake3 for deterministic identification of a configuration in output.

use serde::{Deserialize, Serialize};

/// Which confluence rule-table preset to score with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetChoice {
    #[default]
    Basic,
    Enhanced,
}

/// Flat record of every tunable threshold.
///
/// `Default` yields the basic preset; `enhanced()` tightens the entry gates
/// and enables the session-context rule. All fields are plain numbers or
/// booleans so the record round-trips through TOML unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyConfig {
    /// Account risk per trade, percent. Carried through to the exported
    /// strategy script; not used by the classifier itself.
    pub risk_pct: f64,
    /// ATR multiple for the fallback stop distance.
    pub atr_stop_multiplier: f64,
    /// Take-profit distance as a multiple of the stop distance (ATR fallback).
    pub take_profit_ratio: f64,
    /// Minimum confidence before any non-Hold signal.
    pub min_confidence: f64,
    /// Minimum confluence score before any non-Hold signal.
    pub min_confluence: f64,
    /// Minimum absolute gap size for fair value gap detection.
    pub fvg_min_gap: f64,
    /// Volume multiple over the 5-candle average for order blocks.
    pub order_block_volume_multiplier: f64,
    /// Price fraction for the liquidity touch count (0.0002 = 0.02%).
    pub liquidity_tolerance: f64,
    /// "Near a structural level" distance as a percent of price.
    pub structure_proximity_pct: f64,
    pub use_trailing_stop: bool,
    /// ATR multiple for the trailing stop distance, when enabled.
    pub trailing_atr_multiplier: f64,
    pub rule_set: RuleSetChoice,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            risk_pct: 1.0,
            atr_stop_multiplier: 1.5,
            take_profit_ratio: 2.0,
            min_confidence: 60.0,
            min_confluence: 5.0,
            fvg_min_gap: 0.0002,
            order_block_volume_multiplier: 1.5,
            liquidity_tolerance: 0.0002,
            structure_proximity_pct: 0.5,
            use_trailing_stop: false,
            trailing_atr_multiplier: 1.0,
            rule_set: RuleSetChoice::Basic,
        }
    }
}

impl StrategyConfig {
    /// The basic preset: defaults as-is.
    pub fn basic() -> Self {
        Self::default()
    }

    /// The enhanced preset: stricter gates, session-context rule enabled,
    /// trailing stop on.
    pub fn enhanced() -> Self {
        Self {
            min_confidence: 65.0,
            min_confluence: 8.0,
            use_trailing_stop: true,
            rule_set: RuleSetChoice::Enhanced,
            ..Self::default()
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "basic" => Some(Self::basic()),
            "enhanced" => Some(Self::enhanced()),
            _ => None,
        }
    }

    /// blake3 hash of the canonical JSON rendering, hex-encoded.
    ///
    /// Field order is fixed by the struct definition, so equal configurations
    /// hash equally across runs.
    pub fn config_hash(&self) -> String {
        let json = serde_json::to_string(self).expect("StrategyConfig must serialize");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}
