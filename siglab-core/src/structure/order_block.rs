//! Order blocks — high-volume, large-body candles.
//!
//! A candle qualifies when its volume exceeds the mean of the 5 prior
//! candles by a configurable multiplier and its body covers at least half of
//! its range. Demand blocks close up, supply blocks close down; dojis and
//! zero-range candles are ineligible (no body fraction to divide by).
//! `tested` latches true once a later candle re-enters the block's range.

use crate::domain::Candle;
use crate::structure::MAX_ORDER_BLOCKS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockDirection {
    Demand,
    Supply,
}

/// A detected institutional-order zone spanning the origin candle's range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBlock {
    pub direction: BlockDirection,
    pub upper: f64,
    pub lower: f64,
    pub volume: f64,
    pub origin_index: usize,
    pub tested: bool,
    /// Relative volume times body fraction.
    pub strength: f64,
}

/// Scan for order blocks and return the most recent ones (cap 6).
pub fn detect_order_blocks(candles: &[Candle], volume_multiplier: f64) -> Vec<OrderBlock> {
    let n = candles.len();
    if n < 6 {
        return Vec::new();
    }

    let mut blocks = Vec::new();
    for i in 5..n {
        let candle = &candles[i];
        let range = candle.range();
        if range <= 0.0 {
            continue; // zero-range candle: body fraction undefined
        }

        let avg_volume: f64 =
            candles[i - 5..i].iter().map(|c| c.volume).sum::<f64>() / 5.0;
        if avg_volume <= 0.0 || candle.volume <= avg_volume * volume_multiplier {
            continue;
        }

        let body_fraction = candle.body() / range;
        if body_fraction < 0.5 {
            continue;
        }

        let direction = if candle.is_bullish() {
            BlockDirection::Demand
        } else if candle.is_bearish() {
            BlockDirection::Supply
        } else {
            continue; // doji
        };

        blocks.push(OrderBlock {
            direction,
            upper: candle.high,
            lower: candle.low,
            volume: candle.volume,
            origin_index: i,
            tested: is_tested(candles, i, direction, candle.high, candle.low),
            strength: (candle.volume / avg_volume) * body_fraction,
        });
    }

    if blocks.len() > MAX_ORDER_BLOCKS {
        blocks.drain(..blocks.len() - MAX_ORDER_BLOCKS);
    }
    blocks
}

fn is_tested(
    candles: &[Candle],
    origin: usize,
    direction: BlockDirection,
    upper: f64,
    lower: f64,
) -> bool {
    candles.iter().skip(origin + 1).any(|c| match direction {
        // Price reaching back to the zone counts, including a trade clean
        // through it; only the near bound matters.
        BlockDirection::Demand => c.low <= upper,
        BlockDirection::Supply => c.high >= lower,
    })
}
