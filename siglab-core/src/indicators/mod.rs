//! Indicator library — pure functions over candle sequences.
//!
//! Every function takes `&[Candle]` and returns an ordered series of
//! [`IndicatorPoint`]s (or a small struct of such series), one point per
//! eligible candle. Series are shorter than the input by the indicator's
//! warm-up; insufficient input yields an empty series, never a panic.
//!
//! Multi-series indicators (MACD, Bollinger, ADX) return output structs that
//! bundle their component series with the alignment already applied.

pub mod adx;
pub mod atr;
pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod pivot;
pub mod regime;
pub mod rsi;
pub mod session;
pub mod sma;

pub use adx::{adx, AdxOutput};
pub use atr::{atr, true_range};
pub use bollinger::{bollinger_bands, BollingerPoint};
pub use ema::{ema, ema_of_series};
pub use macd::{macd, MacdOutput};
pub use pivot::{pivot_points, PivotPoints};
pub use regime::{classify_regime, classify_volatility, MarketRegime, VolatilityLevel};
pub use rsi::rsi;
pub use session::{active_sessions, session_active, Session};
pub use sma::sma;

/// Create synthetic candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first candle),
/// high = max(open,close) + 0.5, low = min(open,close) - 0.5, volume = 1000.
/// Timestamps are hourly, strictly increasing.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    use chrono::TimeZone;
    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Candle {
                timestamp: base + chrono::Duration::hours(i as i64),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
                volume: 1000.0,
            }
        })
        .collect()
}

/// Create candles with explicit (open, high, low, close) tuples, volume 1000.
#[cfg(test)]
pub fn make_ohlc_candles(data: &[(f64, f64, f64, f64)]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    use chrono::TimeZone;
    let base = chrono::Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| Candle {
            timestamp: base + chrono::Duration::hours(i as i64),
            open,
            high,
            low,
            close,
            volume: 1000.0,
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
