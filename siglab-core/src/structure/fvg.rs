//! Fair value gaps — 3-candle price voids.
//!
//! A bullish gap forms when candle[i-1].low sits above candle[i+1].high.
//! Note the orientation is inverted relative to the common ICT drawing;
//! downstream scoring depends on it, keep it as-is. Strength is the gap size
//! normalized to price
//! in pips. `filled` latches true the first time a later candle trades back
//! through the far bound and never reverts.

use crate::domain::Candle;
use crate::structure::MAX_FAIR_VALUE_GAPS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapDirection {
    Bullish,
    Bearish,
}

/// A detected price void between the outer candles of a 3-candle pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairValueGap {
    pub direction: GapDirection,
    pub upper: f64,
    pub lower: f64,
    /// Index of the middle candle of the pattern.
    pub origin_index: usize,
    pub filled: bool,
    /// Gap size / middle-candle close * 10_000 (pips).
    pub strength: f64,
}

/// Scan all 3-candle triples and return the most recent gaps (cap 8).
///
/// Fill scanning starts two candles past the middle; the pattern's own third
/// candle defines the bound and must not count as a revisit.
pub fn detect_fair_value_gaps(candles: &[Candle], min_gap: f64) -> Vec<FairValueGap> {
    let n = candles.len();
    if n < 3 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    for i in 1..(n - 1) {
        let first = &candles[i - 1];
        let third = &candles[i + 1];

        if first.low > third.high {
            let gap_size = first.low - third.high;
            if gap_size >= min_gap {
                gaps.push(FairValueGap {
                    direction: GapDirection::Bullish,
                    upper: first.low,
                    lower: third.high,
                    origin_index: i,
                    filled: is_filled(candles, i, GapDirection::Bullish, first.low, third.high),
                    strength: normalize(gap_size, candles[i].close),
                });
            }
        } else if first.high < third.low {
            let gap_size = third.low - first.high;
            if gap_size >= min_gap {
                gaps.push(FairValueGap {
                    direction: GapDirection::Bearish,
                    upper: third.low,
                    lower: first.high,
                    origin_index: i,
                    filled: is_filled(candles, i, GapDirection::Bearish, third.low, first.high),
                    strength: normalize(gap_size, candles[i].close),
                });
            }
        }
    }

    if gaps.len() > MAX_FAIR_VALUE_GAPS {
        gaps.drain(..gaps.len() - MAX_FAIR_VALUE_GAPS);
    }
    gaps
}

fn normalize(gap_size: f64, reference_close: f64) -> f64 {
    if reference_close <= 0.0 {
        return 0.0;
    }
    gap_size / reference_close * 10_000.0
}

fn is_filled(
    candles: &[Candle],
    origin: usize,
    direction: GapDirection,
    upper: f64,
    lower: f64,
) -> bool {
    candles.iter().skip(origin + 2).any(|c| match direction {
        GapDirection::Bullish => c.low <= lower,
        GapDirection::Bearish => c.high >= upper,
    })
}
