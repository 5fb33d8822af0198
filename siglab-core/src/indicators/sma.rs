//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a trailing window.
//! Warm-up: period - 1 (first point at candle index period-1).

use crate::domain::{Candle, IndicatorPoint};

/// Trailing mean of close over `period` candles.
///
/// Returns one point per candle from index `period-1` onward; empty when the
/// input is shorter than `period`.
pub fn sma(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    let n = candles.len();
    if period == 0 || n < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - period + 1);
    let mut sum: f64 = candles.iter().take(period).map(|c| c.close).sum();
    out.push(IndicatorPoint::new(
        candles[period - 1].timestamp,
        sum / period as f64,
    ));

    for i in period..n {
        sum += candles[i].close - candles[i - period].close;
        out.push(IndicatorPoint::new(candles[i].timestamp, sum / period as f64));
    }

    out
}
