//! Market regime and volatility classifiers.
//!
//! Thin threshold maps over the latest ADX and ATR readings.

use serde::{Deserialize, Serialize};

/// Trend-strength regime from the latest ADX value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketRegime {
    TrendingStrong,
    TrendingModerate,
    RangingWeak,
}

impl MarketRegime {
    pub fn is_trending(&self) -> bool {
        matches!(self, Self::TrendingStrong | Self::TrendingModerate)
    }
}

/// Classify the latest ADX value: >30 strong trend, >20 moderate trend,
/// otherwise ranging.
pub fn classify_regime(adx_value: f64) -> MarketRegime {
    if adx_value > 30.0 {
        MarketRegime::TrendingStrong
    } else if adx_value > 20.0 {
        MarketRegime::TrendingModerate
    } else {
        MarketRegime::RangingWeak
    }
}

/// Volatility band from ATR as a percentage of price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityLevel {
    High,
    Medium,
    Low,
}

/// Classify `atr / price * 100`: >1.5 high, >0.8 medium, else low.
/// Non-positive price reads as low (degenerate input, absent evidence).
pub fn classify_volatility(atr_value: f64, price: f64) -> VolatilityLevel {
    if price <= 0.0 {
        return VolatilityLevel::Low;
    }
    let pct = atr_value / price * 100.0;
    if pct > 1.5 {
        VolatilityLevel::High
    } else if pct > 0.8 {
        VolatilityLevel::Medium
    } else {
        VolatilityLevel::Low
    }
}
