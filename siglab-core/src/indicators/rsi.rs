//! Relative Strength Index (RSI) — simple-average variant.
//!
//! Averages gains and losses with a plain trailing window, not Wilder
//! smoothing. Downstream confluence thresholds were tuned against this
//! variant; do not swap in the textbook recurrence.
//!
//! RS = avg_gain / avg_loss, with avg_loss == 0 mapped to RS = 100
//! (so an all-gain window reads ~99.0099, not a clamped 100). A window with
//! no movement at all (both averages zero) emits nothing: that candle is
//! ineligible, and the engine reads the absence as no evidence.
//! RSI = 100 - 100 / (1 + RS).
//! Warm-up: period (first point at candle index `period`).

use crate::domain::{Candle, IndicatorPoint};

/// RSI over `period` close-to-close changes.
pub fn rsi(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    let n = candles.len();
    if period == 0 || n < period + 1 {
        return Vec::new();
    }

    // Per-candle gain/loss from close deltas; index i holds the change into candle i.
    let mut gains = vec![0.0; n];
    let mut losses = vec![0.0; n];
    for i in 1..n {
        let change = candles[i].close - candles[i - 1].close;
        if change > 0.0 {
            gains[i] = change;
        } else {
            losses[i] = -change;
        }
    }

    let mut out = Vec::with_capacity(n - period);
    for i in period..n {
        let window = (i + 1 - period)..=i;
        let avg_gain: f64 = gains[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_loss: f64 = losses[window].iter().sum::<f64>() / period as f64;

        if avg_gain == 0.0 && avg_loss == 0.0 {
            continue; // dead-flat window: no reading
        }

        let rs = if avg_loss == 0.0 { 100.0 } else { avg_gain / avg_loss };
        let value = 100.0 - 100.0 / (1.0 + rs);
        out.push(IndicatorPoint::new(candles[i].timestamp, value));
    }

    out
}
