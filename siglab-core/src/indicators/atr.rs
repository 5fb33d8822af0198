//! Average True Range (ATR) — simple-average variant.
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|).
//! ATR here is a plain trailing mean of TR, not Wilder smoothing; the
//! confluence thresholds assume this variant.
//! Warm-up: period (TR needs a previous close, so the first TR sits on
//! candle index 1 and the first ATR on candle index period).

use crate::domain::{Candle, IndicatorPoint};

/// True Range per adjacent candle pair. `tr[i]` is the range into candle `i`;
/// index 0 has no previous close and is omitted (output length = input - 1).
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    if candles.len() < 2 {
        return Vec::new();
    }
    candles
        .windows(2)
        .map(|pair| {
            let prev_close = pair[0].close;
            let c = &pair[1];
            (c.high - c.low)
                .max((c.high - prev_close).abs())
                .max((c.low - prev_close).abs())
        })
        .collect()
}

/// Trailing mean of True Range over `period` pairs.
pub fn atr(candles: &[Candle], period: usize) -> Vec<IndicatorPoint> {
    let tr = true_range(candles);
    if period == 0 || tr.len() < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(tr.len() - period + 1);
    let mut sum: f64 = tr.iter().take(period).sum();
    // tr[k] belongs to candle k+1, so the first full window ends on candle `period`.
    out.push(IndicatorPoint::new(
        candles[period].timestamp,
        sum / period as f64,
    ));

    for k in period..tr.len() {
        sum += tr[k] - tr[k - period];
        out.push(IndicatorPoint::new(
            candles[k + 1].timestamp,
            sum / period as f64,
        ));
    }

    out
}
