//! ADX — Average Directional Index, trailing-average variant.
//!
//! Steps:
//! 1. +DM / -DM and True Range per adjacent candle pair
//! 2. Plain trailing averages over `period` (no Wilder smoothing here)
//! 3. +DI = 100 * avg(+DM) / avg(TR), -DI likewise
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. Two-phase ADX warm-up: the first period-1 DX values pass through raw;
//!    afterwards adx = (sum of previous period-1 adx values + dx) / period.
//!
//! Warm-up: period (first point at candle index `period`).

use crate::domain::{Candle, IndicatorPoint};
use crate::indicators::atr::true_range;
use serde::{Deserialize, Serialize};

/// ADX plus the directional indicator series, all aligned to the same candles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdxOutput {
    pub adx: Vec<IndicatorPoint>,
    pub plus_di: Vec<IndicatorPoint>,
    pub minus_di: Vec<IndicatorPoint>,
}

/// ADX(period) over the candle sequence.
pub fn adx(candles: &[Candle], period: usize) -> AdxOutput {
    let tr = true_range(candles);
    if period == 0 || tr.len() < period {
        return AdxOutput::default();
    }

    // Directional movement per pair; index k describes the move into candle k+1.
    let n_pairs = tr.len();
    let mut plus_dm = vec![0.0; n_pairs];
    let mut minus_dm = vec![0.0; n_pairs];
    for k in 0..n_pairs {
        let up = candles[k + 1].high - candles[k].high;
        let down = candles[k].low - candles[k + 1].low;
        if up > down && up > 0.0 {
            plus_dm[k] = up;
        }
        if down > up && down > 0.0 {
            minus_dm[k] = down;
        }
    }

    let mut output = AdxOutput::default();
    let mut adx_history: Vec<f64> = Vec::new();

    for k in (period - 1)..n_pairs {
        let window = (k + 1 - period)..=k;
        let avg_tr: f64 = tr[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_plus: f64 = plus_dm[window.clone()].iter().sum::<f64>() / period as f64;
        let avg_minus: f64 = minus_dm[window].iter().sum::<f64>() / period as f64;

        // Zero average range (dead-flat candles): both DIs read 0, DX reads 0.
        let (plus_di, minus_di) = if avg_tr == 0.0 {
            (0.0, 0.0)
        } else {
            (100.0 * avg_plus / avg_tr, 100.0 * avg_minus / avg_tr)
        };

        let di_sum = plus_di + minus_di;
        let dx = if di_sum == 0.0 {
            0.0
        } else {
            100.0 * (plus_di - minus_di).abs() / di_sum
        };

        let adx_value = if adx_history.len() < period - 1 {
            dx
        } else {
            let tail_sum: f64 = adx_history[adx_history.len() + 1 - period..].iter().sum();
            (tail_sum + dx) / period as f64
        };
        adx_history.push(adx_value);

        let timestamp = candles[k + 1].timestamp;
        output.adx.push(IndicatorPoint::new(timestamp, adx_value));
        output.plus_di.push(IndicatorPoint::new(timestamp, plus_di));
        output.minus_di.push(IndicatorPoint::new(timestamp, minus_di));
    }

    output
}
