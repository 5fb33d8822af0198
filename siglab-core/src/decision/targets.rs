//! Stop-loss / take-profit derivation.
//!
//! Prefers live structural levels in the trade's favor: an untested order
//! block edge for the stop, an unfilled fair value gap bound or unswept
//! liquidity level for the target. Falls back to ATR multiples when no
//! structural level exists on the needed side; with no ATR either, the leg
//! stays `None`.

use crate::config::StrategyConfig;
use crate::domain::SignalKind;
use crate::structure::{
    BlockDirection, FairValueGap, LiquiditySide, LiquidityZone, OrderBlock,
};

/// Derived risk levels for a non-Hold signal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TradeTargets {
    pub stop_loss: Option<f64>,
    pub take_profit: Option<f64>,
    /// Trailing distance (price units), present when the config enables it.
    pub trailing_stop: Option<f64>,
    pub risk_reward: Option<f64>,
}

/// Derive stop/target levels for the signal at the given price.
/// Hold signals get no levels.
pub fn derive_targets(
    kind: SignalKind,
    price: f64,
    atr: Option<f64>,
    gaps: &[FairValueGap],
    blocks: &[OrderBlock],
    zones: &[LiquidityZone],
    config: &StrategyConfig,
) -> TradeTargets {
    if kind == SignalKind::Hold {
        return TradeTargets::default();
    }
    let long = kind.is_buy();

    let atr_stop = atr.map(|a| a * config.atr_stop_multiplier);
    let atr_target = atr_stop.map(|d| d * config.take_profit_ratio);

    let stop_loss = structural_stop(long, price, blocks)
        .or(atr_stop.map(|d| if long { price - d } else { price + d }));
    let take_profit = structural_target(long, price, gaps, zones)
        .or(atr_target.map(|d| if long { price + d } else { price - d }));

    let trailing_stop = if config.use_trailing_stop {
        atr.map(|a| a * config.trailing_atr_multiplier)
    } else {
        None
    };

    let risk_reward = match (stop_loss, take_profit) {
        (Some(sl), Some(tp)) => {
            let risk = (price - sl).abs();
            if risk > 0.0 {
                Some((tp - price).abs() / risk)
            } else {
                None
            }
        }
        _ => None,
    };

    TradeTargets {
        stop_loss,
        take_profit,
        trailing_stop,
        risk_reward,
    }
}

/// Nearest untested order block edge protecting the trade: the demand block
/// bound below price for longs, the supply block bound above for shorts.
fn structural_stop(long: bool, price: f64, blocks: &[OrderBlock]) -> Option<f64> {
    blocks
        .iter()
        .filter(|b| !b.tested)
        .filter_map(|b| match b.direction {
            BlockDirection::Demand if long && b.lower < price => Some(b.lower),
            BlockDirection::Supply if !long && b.upper > price => Some(b.upper),
            _ => None,
        })
        .min_by(|a, b| (price - a).abs().total_cmp(&(price - b).abs()))
}

/// Nearest live level on the profit side: an unfilled gap bound or an
/// unswept liquidity price beyond the entry.
fn structural_target(
    long: bool,
    price: f64,
    gaps: &[FairValueGap],
    zones: &[LiquidityZone],
) -> Option<f64> {
    let gap_levels = gaps.iter().filter(|g| !g.filled).filter_map(|g| {
        if long && g.lower > price {
            Some(g.lower)
        } else if !long && g.upper < price {
            Some(g.upper)
        } else {
            None
        }
    });
    let zone_levels = zones.iter().filter(|z| !z.swept).filter_map(|z| {
        match z.direction {
            LiquiditySide::BuySide if long && z.price > price => Some(z.price),
            LiquiditySide::SellSide if !long && z.price < price => Some(z.price),
            _ => None,
        }
    });

    gap_levels
        .chain(zone_levels)
        .min_by(|a, b| (price - a).abs().total_cmp(&(price - b).abs()))
}
