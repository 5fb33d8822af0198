//! Liquidity zones — swing extremes presumed to cluster resting stops.
//!
//! A swing high (low) is a candle whose high (low) strictly exceeds (sits
//! below) its 3 neighbors on each side. Buy-side liquidity rests above swing
//! highs, sell-side below swing lows. Strength combines relative volume with
//! a touch count: nearby candles whose extreme comes within a small price
//! tolerance of the level. `swept` latches once a later candle trades beyond
//! the extreme.

use crate::domain::Candle;
use crate::structure::MAX_LIQUIDITY_ZONES;
use serde::{Deserialize, Serialize};

const SWING_NEIGHBORS: usize = 3;
const TOUCH_WINDOW: usize = 10;
const VOLUME_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquiditySide {
    BuySide,
    SellSide,
}

/// A swing-extreme price level with sweep state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityZone {
    pub direction: LiquiditySide,
    pub price: f64,
    /// Relative volume times (1 + touch count).
    pub strength: f64,
    pub origin_index: usize,
    pub swept: bool,
}

/// Detect swing-extreme liquidity zones (cap 8, most recent kept).
///
/// `tolerance` is a price fraction (0.0002 = 0.02%) for the touch count.
pub fn detect_liquidity_zones(candles: &[Candle], tolerance: f64) -> Vec<LiquidityZone> {
    let n = candles.len();
    if n < 2 * SWING_NEIGHBORS + 1 {
        return Vec::new();
    }

    let mut zones = Vec::new();
    for i in SWING_NEIGHBORS..(n - SWING_NEIGHBORS) {
        let candle = &candles[i];
        let neighbors =
            || (i - SWING_NEIGHBORS..i).chain(i + 1..=i + SWING_NEIGHBORS);

        if neighbors().all(|j| candles[j].high < candle.high) {
            zones.push(build_zone(candles, i, LiquiditySide::BuySide, candle.high, tolerance));
        }
        if neighbors().all(|j| candles[j].low > candle.low) {
            zones.push(build_zone(candles, i, LiquiditySide::SellSide, candle.low, tolerance));
        }
    }

    if zones.len() > MAX_LIQUIDITY_ZONES {
        zones.drain(..zones.len() - MAX_LIQUIDITY_ZONES);
    }
    zones
}

fn build_zone(
    candles: &[Candle],
    origin: usize,
    direction: LiquiditySide,
    price: f64,
    tolerance: f64,
) -> LiquidityZone {
    let n = candles.len();

    // Touches: candles within ±TOUCH_WINDOW (excluding the swing itself)
    // whose matching extreme comes within `tolerance` of the level.
    let lo = origin.saturating_sub(TOUCH_WINDOW);
    let hi = (origin + TOUCH_WINDOW).min(n - 1);
    let touches = (lo..=hi)
        .filter(|&j| j != origin)
        .filter(|&j| {
            let extreme = match direction {
                LiquiditySide::BuySide => candles[j].high,
                LiquiditySide::SellSide => candles[j].low,
            };
            (extreme - price).abs() <= price * tolerance
        })
        .count();

    let vol_lo = origin.saturating_sub(VOLUME_WINDOW);
    let window = &candles[vol_lo..=origin];
    let avg_volume: f64 =
        window.iter().map(|c| c.volume).sum::<f64>() / window.len() as f64;
    let relative_volume = if avg_volume > 0.0 {
        candles[origin].volume / avg_volume
    } else {
        0.0
    };

    let swept = candles.iter().skip(origin + 1).any(|c| match direction {
        LiquiditySide::BuySide => c.high > price,
        LiquiditySide::SellSide => c.low < price,
    });

    LiquidityZone {
        direction,
        price,
        strength: relative_volume * (1.0 + touches as f64),
        origin_index: origin,
        swept,
    }
}
