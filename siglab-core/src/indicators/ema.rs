//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = (close[t] - EMA[t-1]) * alpha + EMA[t-1], alpha = 2/(period+1).
//! Seed: SMA of the first `period` closes.
//! Warm-up: period - 1.

use crate::domain::{Candle, IndicatorPoint};

/// EMA of close over `period` candles. Empty when input is shorter than `period`.
pub fn ema(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    let n = candles.len();
    if period == 0 || n < period {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let seed: f64 = candles.iter().take(period).map(|c| c.close).sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(n - period + 1);
    out.push(IndicatorPoint::new(candles[period - 1].timestamp, seed));

    let mut prev = seed;
    for candle in &candles[period..] {
        let value = (candle.close - prev) * alpha + prev;
        out.push(IndicatorPoint::new(candle.timestamp, value));
        prev = value;
    }

    out
}

/// EMA over a raw f64 slice, same seed and recurrence.
///
/// Used by composed indicators (the MACD signal line) that need an EMA of a
/// series that is not candle closes.
pub fn ema_of_series(values: &[f64], period: usize) -> Vec<f64> {
    let n = values.len();
    if period == 0 || n < period {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let seed: f64 = values.iter().take(period).sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(n - period + 1);
    out.push(seed);

    let mut prev = seed;
    for &v in &values[period..] {
        let value = (v - prev) * alpha + prev;
        out.push(value);
        prev = value;
    }

    out
}
