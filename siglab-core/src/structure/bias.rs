//! Microstructure bias — short-horizon directional vote.
//!
//! Tallies strictly-higher-highs against strictly-lower-lows over the last 5
//! candles, then adds structural evidence sitting on the favorable side of
//! the latest close: unfilled bullish gaps and untested demand blocks below
//! price vote bullish; unfilled bearish gaps and untested supply blocks above
//! price vote bearish. Majority wins.

use crate::domain::Candle;
use crate::structure::{BlockDirection, FairValueGap, GapDirection, OrderBlock};
use serde::{Deserialize, Serialize};

const LOOKBACK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

/// Majority vote of directional evidence over the last 5 candles plus
/// favorable unfilled/untested structure. Neutral on ties or short input.
pub fn microstructure_bias(
    candles: &[Candle],
    gaps: &[FairValueGap],
    blocks: &[OrderBlock],
) -> Bias {
    if candles.len() < LOOKBACK + 1 {
        return Bias::Neutral;
    }
    let price = match candles.last() {
        Some(c) => c.close,
        None => return Bias::Neutral,
    };

    let tail = &candles[candles.len() - LOOKBACK - 1..];
    let mut bullish = 0usize;
    let mut bearish = 0usize;
    for pair in tail.windows(2) {
        if pair[1].high > pair[0].high {
            bullish += 1;
        }
        if pair[1].low < pair[0].low {
            bearish += 1;
        }
    }

    for gap in gaps.iter().filter(|g| !g.filled) {
        match gap.direction {
            GapDirection::Bullish if gap.upper < price => bullish += 1,
            GapDirection::Bearish if gap.lower > price => bearish += 1,
            _ => {}
        }
    }
    for block in blocks.iter().filter(|b| !b.tested) {
        match block.direction {
            BlockDirection::Demand if block.upper < price => bullish += 1,
            BlockDirection::Supply if block.lower > price => bearish += 1,
            _ => {}
        }
    }

    match bullish.cmp(&bearish) {
        std::cmp::Ordering::Greater => Bias::Bullish,
        std::cmp::Ordering::Less => Bias::Bearish,
        std::cmp::Ordering::Equal => Bias::Neutral,
    }
}
