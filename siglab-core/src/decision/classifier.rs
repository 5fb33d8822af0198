//! Signal classifier — pure function of the confluence result.
//!
//! Gates first (confidence, confluence, tie), then tiers strongest-first:
//! the strong tier requires all three thresholds simultaneously, the regular
//! tier its own three, and whatever passes the gates but neither tier is a
//! weak signal. No tier is evaluated twice.

use crate::config::StrategyConfig;
use crate::confluence::ConfluenceResult;
use crate::domain::SignalKind;

// Joint tier thresholds: (confluence, |margin|, confidence).
const STRONG_TIER: (f64, f64, f64) = (15.0, 10.0, 80.0);
const REGULAR_TIER: (f64, f64, f64) = (10.0, 6.0, 70.0);

/// Map a confluence result to one of the seven signal levels.
pub fn classify(result: &ConfluenceResult, config: &StrategyConfig) -> SignalKind {
    if result.confidence < config.min_confidence {
        return SignalKind::Hold;
    }
    if result.confluence_score < config.min_confluence {
        return SignalKind::Hold;
    }

    let margin = result.margin();
    if margin == 0.0 {
        return SignalKind::Hold;
    }
    let bullish = margin > 0.0;

    let meets = |(confluence, abs_margin, confidence): (f64, f64, f64)| {
        result.confluence_score >= confluence
            && margin.abs() >= abs_margin
            && result.confidence >= confidence
    };

    if meets(STRONG_TIER) {
        if bullish { SignalKind::StrongBuy } else { SignalKind::StrongSell }
    } else if meets(REGULAR_TIER) {
        if bullish { SignalKind::Buy } else { SignalKind::Sell }
    } else if bullish {
        SignalKind::WeakBuy
    } else {
        SignalKind::WeakSell
    }
}
