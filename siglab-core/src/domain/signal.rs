//! Signal — the discrete trading decision emitted by the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Seven-level ordinal signal. `Hold` sits at the center; variants order from
/// most bearish to most bullish so comparisons follow conviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SignalKind {
    StrongSell,
    Sell,
    WeakSell,
    Hold,
    WeakBuy,
    Buy,
    StrongBuy,
}

impl SignalKind {
    /// True for any of the three buy levels.
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::WeakBuy | Self::Buy | Self::StrongBuy)
    }

    /// True for any of the three sell levels.
    pub fn is_sell(&self) -> bool {
        matches!(self, Self::WeakSell | Self::Sell | Self::StrongSell)
    }
}

/// The pipeline's final output: a signal level plus the price context and
/// derived risk levels. Stop/target fields are `None` for `Hold` or when no
/// level (structural or ATR-based) could be derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub price: f64,
    pub timestamp: DateTime<Utc>,
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    pub trailing_stop: Option<f64>,
    pub risk_reward: Option<f64>,
}

impl Signal {
    /// A flat `Hold` at the given price point, with no risk levels.
    pub fn hold(price: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind: SignalKind::Hold,
            price,
            timestamp,
            stop_loss: None,
            take_profit: None,
            trailing_stop: None,
            risk_reward: None,
        }
    }
}
