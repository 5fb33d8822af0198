//! Classic floor-trader pivot points.
//!
//! Computed once from the single most recent completed candle:
//! P = (H+L+C)/3, R1 = 2P-L, S1 = 2P-H, R2 = P+(H-L), S2 = P-(H-L).

use crate::domain::Candle;
use serde::{Deserialize, Serialize};

/// Pivot and the first two support/resistance levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoints {
    pub pivot: f64,
    pub r1: f64,
    pub s1: f64,
    pub r2: f64,
    pub s2: f64,
}

/// Pivot points from the last candle, `None` for an empty sequence.
pub fn pivot_points(candles: &[Candle]) -> Option<PivotPoints> {
    let last = candles.last()?;
    let pivot = (last.high + last.low + last.close) / 3.0;
    let range = last.high - last.low;
    Some(PivotPoints {
        pivot,
        r1: 2.0 * pivot - last.low,
        s1: 2.0 * pivot - last.high,
        r2: pivot + range,
        s2: pivot - range,
    })
}
