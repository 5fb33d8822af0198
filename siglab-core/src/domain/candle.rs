//! Candle — the fundamental market data unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV candle for one time bucket.
///
/// Candle sequences are ordered by strictly increasing timestamp. Gaps are
/// tolerated; out-of-order or non-positive-price data is rejected at the
/// pipeline boundary by [`validate_candles`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    /// Full candle range, high to low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Absolute body size, open to close.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// True if the candle closed above its open.
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// True if the candle closed below its open.
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Basic OHLC sanity check: high is the max, low is the min, prices positive.
    pub fn is_sane(&self) -> bool {
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.high > 0.0
            && self.low > 0.0
            && self.close > 0.0
            && self.volume >= 0.0
    }
}

/// Rejected-input errors. The only fatal condition in the core: everything
/// else (short series, degenerate candles) degrades to absent output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandleError {
    #[error("timestamps not strictly increasing at index {index}")]
    NonMonotonicTimestamps { index: usize },

    #[error("malformed candle at index {index}: non-positive price or inverted range")]
    MalformedCandle { index: usize },
}

/// Validate a candle sequence before analysis.
///
/// Checks strict timestamp ordering and per-candle OHLC sanity. An empty
/// sequence is valid (the pipeline degrades to empty output).
pub fn validate_candles(candles: &[Candle]) -> Result<(), CandleError> {
    for (i, candle) in candles.iter().enumerate() {
        if !candle.is_sane() {
            return Err(CandleError::MalformedCandle { index: i });
        }
        if i > 0 && candle.timestamp <= candles[i - 1].timestamp {
            return Err(CandleError::NonMonotonicTimestamps { index: i });
        }
    }
    Ok(())
}
