//! Bollinger Bands — SMA middle band +/- standard-deviation multiplier.
//!
//! Uses population standard deviation (divide by N) over the same trailing
//! window as the mean. Warm-up: period - 1.

use crate::domain::Candle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candle's worth of Bollinger output, all three bands together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerPoint {
    pub timestamp: DateTime<Utc>,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Bollinger Bands over `period` closes with the given multiplier.
pub fn bollinger_bands(candles: &[Candle], period: usize, multiplier: f64) -> Vec<BollingerPoint> {
    let n = candles.len();
    if period == 0 || n < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(n - period + 1);
    for i in (period - 1)..n {
        let window = &candles[(i + 1 - period)..=i];
        let mean: f64 = window.iter().map(|c| c.close).sum::<f64>() / period as f64;
        let variance: f64 = window
            .iter()
            .map(|c| {
                let diff = c.close - mean;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let std_dev = variance.sqrt();

        out.push(BollingerPoint {
            timestamp: candles[i].timestamp,
            upper: mean + multiplier * std_dev,
            middle: mean,
            lower: mean - multiplier * std_dev,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_candles, DEFAULT_EPSILON};

    #[test]
    fn bollinger_constant_series_collapses_to_middle() {
        let candles = make_candles(&[1.1; 25]);
        let result = bollinger_bands(&candles, 20, 2.0);
        assert_eq!(result.len(), 6);
        for point in &result {
            assert_approx(point.upper, 1.1, DEFAULT_EPSILON);
            assert_approx(point.middle, 1.1, DEFAULT_EPSILON);
            assert_approx(point.lower, 1.1, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn bollinger_population_stddev_hand_computed() {
        // Window [10, 12, 14]: mean 12, population variance = (4+0+4)/3 = 8/3.
        let candles = make_candles(&[10.0, 12.0, 14.0]);
        let result = bollinger_bands(&candles, 3, 2.0);
        assert_eq!(result.len(), 1);
        let sigma = (8.0f64 / 3.0).sqrt();
        assert_approx(result[0].middle, 12.0, DEFAULT_EPSILON);
        assert_approx(result[0].upper, 12.0 + 2.0 * sigma, DEFAULT_EPSILON);
        assert_approx(result[0].lower, 12.0 - 2.0 * sigma, DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_band_ordering() {
        let candles = make_candles(&[
            100.0, 103.0, 99.0, 105.0, 97.0, 108.0, 102.0, 95.0, 110.0, 104.0,
        ]);
        let result = bollinger_bands(&candles, 5, 2.0);
        for point in &result {
            assert!(point.lower <= point.middle);
            assert!(point.middle <= point.upper);
        }
    }

    #[test]
    fn bollinger_too_few_candles_is_empty() {
        let candles = make_candles(&[10.0, 11.0]);
        assert!(bollinger_bands(&candles, 20, 2.0).is_empty());
    }
}
