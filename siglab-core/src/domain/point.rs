//! IndicatorPoint — one timestamped indicator value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single emitted indicator value, aligned to the candle that produced it.
///
/// An indicator series is an ordered `Vec<IndicatorPoint>`, shorter than the
/// input candle sequence by the indicator's warm-up. An empty series means
/// the input was too short — absent evidence, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl IndicatorPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Latest value of a series, if any. Callers must treat `None` as absent
/// evidence rather than indexing blindly.
pub fn latest(series: &[IndicatorPoint]) -> Option<f64> {
    series.last().map(|p| p.value)
}
