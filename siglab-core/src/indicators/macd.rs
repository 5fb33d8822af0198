//! MACD — Moving Average Convergence Divergence (12, 26, 9).
//!
//! macd_line[j] = EMA12[j + (26-12)] - EMA26[j], anchored to the EMA26
//! window: both operands sit on candle index 25 + j. The 14-point offset into
//! the EMA12 series is load-bearing; shifting it by one silently retimes
//! every downstream crossover.
//!
//! signal_line = EMA(9) of the macd values (SMA seed), only once the macd
//! line has at least 9 points. histogram = macd - signal, tail-aligned to the
//! most recent candles (same length as the signal line).

use crate::domain::{Candle, IndicatorPoint};
use crate::indicators::ema::{ema, ema_of_series};

const FAST_PERIOD: usize = 12;
const SLOW_PERIOD: usize = 26;
const SIGNAL_PERIOD: usize = 9;

/// The three MACD series, alignment already applied.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MacdOutput {
    pub macd_line: Vec<IndicatorPoint>,
    pub signal_line: Vec<IndicatorPoint>,
    pub histogram: Vec<IndicatorPoint>,
}

/// MACD(12, 26, 9) over the candle sequence. All series empty when fewer
/// than 26 candles; signal and histogram empty until the macd line has 9
/// points (i.e. 34 candles).
pub fn macd(candles: &[Candle]) -> MacdOutput {
    let fast = ema(candles, FAST_PERIOD);
    let slow = ema(candles, SLOW_PERIOD);

    if slow.is_empty() {
        return MacdOutput::default();
    }

    // Pair each EMA26 point with the EMA12 point on the same candle.
    let offset = SLOW_PERIOD - FAST_PERIOD;
    let macd_line: Vec<IndicatorPoint> = slow
        .iter()
        .enumerate()
        .map(|(j, slow_point)| {
            IndicatorPoint::new(slow_point.timestamp, fast[j + offset].value - slow_point.value)
        })
        .collect();

    if macd_line.len() < SIGNAL_PERIOD {
        return MacdOutput {
            macd_line,
            signal_line: Vec::new(),
            histogram: Vec::new(),
        };
    }

    let macd_values: Vec<f64> = macd_line.iter().map(|p| p.value).collect();
    let signal_values = ema_of_series(&macd_values, SIGNAL_PERIOD);

    // Signal point k sits on the same candle as macd point (SIGNAL_PERIOD-1)+k.
    let signal_line: Vec<IndicatorPoint> = signal_values
        .iter()
        .enumerate()
        .map(|(k, &value)| {
            IndicatorPoint::new(macd_line[SIGNAL_PERIOD - 1 + k].timestamp, value)
        })
        .collect();

    // Histogram: tail-aligned difference, one point per signal point.
    let tail_start = macd_line.len() - signal_line.len();
    let histogram: Vec<IndicatorPoint> = signal_line
        .iter()
        .enumerate()
        .map(|(k, signal_point)| {
            IndicatorPoint::new(
                signal_point.timestamp,
                macd_line[tail_start + k].value - signal_point.value,
            )
        })
        .collect();

    MacdOutput {
        macd_line,
        signal_line,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_candles, DEFAULT_EPSILON};

    #[test]
    fn macd_alignment_pairs_same_candle() {
        // 27 candles: EMA26 has 2 points (candles 25, 26), EMA12 has 16.
        // macd[0] must be ema12-at-candle-25 minus ema26-at-candle-25,
        // i.e. ema12[14] - ema26[0].
        let closes: Vec<f64> = (0..27).map(|i| 100.0 + i as f64 * 0.3).collect();
        let candles = make_candles(&closes);

        let fast = ema(&candles, 12);
        let slow = ema(&candles, 26);
        let output = macd(&candles);

        assert_eq!(output.macd_line.len(), 2);
        assert_approx(
            output.macd_line[0].value,
            fast[14].value - slow[0].value,
            DEFAULT_EPSILON,
        );
        assert_approx(
            output.macd_line[1].value,
            fast[15].value - slow[1].value,
            DEFAULT_EPSILON,
        );
        assert_eq!(output.macd_line[0].timestamp, candles[25].timestamp);
        assert_eq!(output.macd_line[1].timestamp, candles[26].timestamp);

        // Fewer than 9 macd points: no signal line, no histogram.
        assert!(output.signal_line.is_empty());
        assert!(output.histogram.is_empty());
    }

    #[test]
    fn macd_signal_seed_is_mean_of_first_nine() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 3.0).collect();
        let candles = make_candles(&closes);
        let output = macd(&candles);

        assert_eq!(output.macd_line.len(), 40 - 25);
        assert_eq!(output.signal_line.len(), output.macd_line.len() - 8);

        let seed: f64 = output.macd_line[..9].iter().map(|p| p.value).sum::<f64>() / 9.0;
        assert_approx(output.signal_line[0].value, seed, DEFAULT_EPSILON);
        assert_eq!(
            output.signal_line[0].timestamp,
            output.macd_line[8].timestamp
        );
    }

    #[test]
    fn macd_histogram_is_tail_aligned_difference() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.7).sin() * 3.0).collect();
        let candles = make_candles(&closes);
        let output = macd(&candles);

        assert_eq!(output.histogram.len(), output.signal_line.len());
        let tail = output.macd_line.len() - output.signal_line.len();
        for (k, hist) in output.histogram.iter().enumerate() {
            assert_approx(
                hist.value,
                output.macd_line[tail + k].value - output.signal_line[k].value,
                DEFAULT_EPSILON,
            );
            assert_eq!(hist.timestamp, output.signal_line[k].timestamp);
        }
    }

    #[test]
    fn macd_rising_trend_is_positive() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let candles = make_candles(&closes);
        let output = macd(&candles);
        // Fast EMA above slow EMA all the way up.
        assert!(output.macd_line.iter().all(|p| p.value > 0.0));
    }

    #[test]
    fn macd_too_few_candles_is_empty() {
        let candles = make_candles(&[100.0; 25]);
        let output = macd(&candles);
        assert!(output.macd_line.is_empty());
        assert!(output.signal_line.is_empty());
        assert!(output.histogram.is_empty());
    }
}
