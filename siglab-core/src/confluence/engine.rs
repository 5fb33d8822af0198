//! The scoring engine — evaluates the rule table against latest readings.

use crate::confluence::{ConfluenceResult, RuleSet};
use crate::indicators::BollingerPoint;
use crate::structure::{
    Bias, BlockDirection, GapDirection, LiquiditySide, StructureSnapshot, VolumeLevel,
};

/// Latest-value snapshot the engine scores against.
///
/// Every indicator field is an `Option`: `None` means the series was too
/// short to produce a value, which reads as absent evidence — the dependent
/// rule simply does not fire.
#[derive(Debug, Clone)]
pub struct ConfluenceInputs<'a> {
    pub price: f64,
    pub rsi: Option<f64>,
    /// Latest and previous MACD histogram values, for crossover detection.
    pub macd_histogram: Option<f64>,
    pub prev_macd_histogram: Option<f64>,
    pub ema_fast: Option<f64>,
    pub ema_slow: Option<f64>,
    pub bollinger: Option<BollingerPoint>,
    pub adx: Option<f64>,
    pub plus_di: Option<f64>,
    pub minus_di: Option<f64>,
    pub pivot: Option<f64>,
    pub structure: &'a StructureSnapshot,
    pub session_active: bool,
    /// "Near a structural level" distance, percent of price.
    pub proximity_pct: f64,
}

struct Tally {
    bullish: f64,
    bearish: f64,
    confluence: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            bullish: 0.0,
            bearish: 0.0,
            confluence: 0.0,
            reasons: Vec::new(),
        }
    }

    fn bull(&mut self, weight: f64, reason: String) {
        self.bullish += weight;
        self.confluence += weight;
        self.reasons.push(reason);
    }

    fn bear(&mut self, weight: f64, reason: String) {
        self.bearish += weight;
        self.confluence += weight;
        self.reasons.push(reason);
    }

    /// Context rules raise confluence without taking a side.
    fn context(&mut self, weight: f64, reason: String) {
        self.confluence += weight;
        self.reasons.push(reason);
    }
}

/// Evaluate the full rule table. Each rule fires at most once; rule order
/// fixes the reason order only.
pub fn evaluate(inputs: &ConfluenceInputs, ruleset: &RuleSet) -> ConfluenceResult {
    let mut tally = Tally::new();
    let w = &ruleset.weights;

    // RSI extremes.
    if let Some(rsi) = inputs.rsi {
        if w.rsi_extreme > 0.0 {
            if rsi < ruleset.rsi_oversold {
                tally.bull(
                    w.rsi_extreme,
                    format!("RSI oversold ({rsi:.1} < {:.0})", ruleset.rsi_oversold),
                );
            } else if rsi > ruleset.rsi_overbought {
                tally.bear(
                    w.rsi_extreme,
                    format!("RSI overbought ({rsi:.1} > {:.0})", ruleset.rsi_overbought),
                );
            }
        }
    }

    // MACD histogram crossover.
    if let (Some(hist), Some(prev)) = (inputs.macd_histogram, inputs.prev_macd_histogram) {
        if w.macd_cross > 0.0 {
            if prev <= 0.0 && hist > 0.0 {
                tally.bull(w.macd_cross, "MACD bullish crossover".to_string());
            } else if prev >= 0.0 && hist < 0.0 {
                tally.bear(w.macd_cross, "MACD bearish crossover".to_string());
            }
        }
    }

    // EMA trend alignment.
    if let (Some(fast), Some(slow)) = (inputs.ema_fast, inputs.ema_slow) {
        if w.ema_trend > 0.0 {
            if fast > slow {
                tally.bull(w.ema_trend, "EMA12 above EMA26".to_string());
            } else if fast < slow {
                tally.bear(w.ema_trend, "EMA12 below EMA26".to_string());
            }
        }
    }

    // Bollinger band breaches (mean-reversion reading). Strictly outside the
    // band: a degenerate flat band equal to price is no evidence.
    if let Some(bands) = inputs.bollinger {
        if w.bollinger_touch > 0.0 {
            if inputs.price < bands.lower {
                tally.bull(w.bollinger_touch, "close below lower Bollinger band".to_string());
            } else if inputs.price > bands.upper {
                tally.bear(w.bollinger_touch, "close above upper Bollinger band".to_string());
            }
        }
    }

    // ADX directional strength.
    if let (Some(adx), Some(plus), Some(minus)) = (inputs.adx, inputs.plus_di, inputs.minus_di) {
        if w.adx_directional > 0.0 && adx > 20.0 {
            if plus > minus {
                tally.bull(
                    w.adx_directional,
                    format!("ADX trending ({adx:.1}) with +DI dominant"),
                );
            } else if minus > plus {
                tally.bear(
                    w.adx_directional,
                    format!("ADX trending ({adx:.1}) with -DI dominant"),
                );
            }
        }
    }

    // Proximity to an unfilled fair value gap.
    if w.fvg_proximity > 0.0 {
        let nearest = inputs
            .structure
            .fair_value_gaps
            .iter()
            .filter(|g| !g.filled)
            .map(|g| (band_distance(inputs.price, g.lower, g.upper), g))
            .filter(|(d, _)| *d <= inputs.price * inputs.proximity_pct / 100.0)
            .min_by(|a, b| a.0.total_cmp(&b.0));
        if let Some((_, gap)) = nearest {
            match gap.direction {
                GapDirection::Bullish => {
                    tally.bull(w.fvg_proximity, "price near unfilled bullish FVG".to_string())
                }
                GapDirection::Bearish => {
                    tally.bear(w.fvg_proximity, "price near unfilled bearish FVG".to_string())
                }
            }
        }
    }

    // Proximity to an untested order block.
    if w.order_block_proximity > 0.0 {
        let nearest = inputs
            .structure
            .order_blocks
            .iter()
            .filter(|b| !b.tested)
            .map(|b| (band_distance(inputs.price, b.lower, b.upper), b))
            .filter(|(d, _)| *d <= inputs.price * inputs.proximity_pct / 100.0)
            .min_by(|a, b| a.0.total_cmp(&b.0));
        if let Some((_, block)) = nearest {
            match block.direction {
                BlockDirection::Demand => tally.bull(
                    w.order_block_proximity,
                    "price near untested demand order block".to_string(),
                ),
                BlockDirection::Supply => tally.bear(
                    w.order_block_proximity,
                    "price near untested supply order block".to_string(),
                ),
            }
        }
    }

    // Most recent liquidity sweep reads as a reversal.
    if w.liquidity_sweep > 0.0 {
        let latest_sweep = inputs
            .structure
            .liquidity_zones
            .iter()
            .filter(|z| z.swept)
            .max_by_key(|z| z.origin_index);
        if let Some(zone) = latest_sweep {
            match zone.direction {
                LiquiditySide::SellSide => tally.bull(
                    w.liquidity_sweep,
                    "sell-side liquidity swept (reversal up)".to_string(),
                ),
                LiquiditySide::BuySide => tally.bear(
                    w.liquidity_sweep,
                    "buy-side liquidity swept (reversal down)".to_string(),
                ),
            }
        }
    }

    // Microstructure bias.
    if w.microstructure_bias > 0.0 {
        match inputs.structure.bias {
            Bias::Bullish => {
                tally.bull(w.microstructure_bias, "bullish microstructure bias".to_string())
            }
            Bias::Bearish => {
                tally.bear(w.microstructure_bias, "bearish microstructure bias".to_string())
            }
            Bias::Neutral => {}
        }
    }

    // Pivot side.
    if let Some(pivot) = inputs.pivot {
        if w.pivot_side > 0.0 {
            if inputs.price > pivot {
                tally.bull(w.pivot_side, "close above daily pivot".to_string());
            } else if inputs.price < pivot {
                tally.bear(w.pivot_side, "close below daily pivot".to_string());
            }
        }
    }

    // Volume context (no direction).
    if w.volume_context > 0.0 && inputs.structure.volume == Some(VolumeLevel::High) {
        tally.context(w.volume_context, "high relative volume".to_string());
    }

    // Session context (no direction; enhanced preset only).
    if w.session_context > 0.0 && inputs.session_active {
        tally.context(w.session_context, "major session active".to_string());
    }

    let confidence = shape_confidence(&tally, ruleset);
    ConfluenceResult {
        bullish_score: tally.bullish,
        bearish_score: tally.bearish,
        confidence,
        confluence_score: tally.confluence,
        reasons: tally.reasons,
    }
}

/// Distance from price to a band: zero inside, else gap to the nearer edge.
fn band_distance(price: f64, lower: f64, upper: f64) -> f64 {
    if price < lower {
        lower - price
    } else if price > upper {
        price - upper
    } else {
        0.0
    }
}

fn shape_confidence(tally: &Tally, ruleset: &RuleSet) -> f64 {
    let total = tally.bullish + tally.bearish;
    let base = if total > 0.0 {
        tally.bullish.max(tally.bearish) / total * 100.0
    } else {
        0.0
    };

    let boost = (tally.confluence * ruleset.boost_factor).min(ruleset.boost_cap);
    let mut confidence = base + boost;

    if tally.confluence >= ruleset.floor_trigger {
        confidence = confidence.max(ruleset.confidence_floor);
    }

    confidence.clamp(0.0, ruleset.confidence_max.min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::{FairValueGap, LiquidityZone, OrderBlock};

    fn empty_structure() -> StructureSnapshot {
        StructureSnapshot::default()
    }

    fn bare_inputs(structure: &StructureSnapshot) -> ConfluenceInputs<'_> {
        ConfluenceInputs {
            price: 100.0,
            rsi: None,
            macd_histogram: None,
            prev_macd_histogram: None,
            ema_fast: None,
            ema_slow: None,
            bollinger: None,
            adx: None,
            plus_di: None,
            minus_di: None,
            pivot: None,
            structure,
            session_active: false,
            proximity_pct: 0.5,
        }
    }

    #[test]
    fn absent_evidence_scores_nothing() {
        let structure = empty_structure();
        let result = evaluate(&bare_inputs(&structure), &RuleSet::basic());
        assert_eq!(result.bullish_score, 0.0);
        assert_eq!(result.bearish_score, 0.0);
        assert_eq!(result.confluence_score, 0.0);
        assert_eq!(result.confidence, 0.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn rsi_oversold_fires_bullish() {
        let structure = empty_structure();
        let mut inputs = bare_inputs(&structure);
        inputs.rsi = Some(25.0);
        let result = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(result.bullish_score, 6.0);
        assert_eq!(result.bearish_score, 0.0);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("oversold"));
    }

    #[test]
    fn macd_crossover_needs_sign_change() {
        let structure = empty_structure();
        let mut inputs = bare_inputs(&structure);
        inputs.prev_macd_histogram = Some(-0.2);
        inputs.macd_histogram = Some(0.1);
        let result = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(result.bullish_score, 6.0);

        // Same sign on both: no crossover.
        inputs.prev_macd_histogram = Some(0.3);
        let result = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(result.bullish_score, 0.0);
    }

    #[test]
    fn fvg_proximity_respects_tolerance() {
        let mut structure = empty_structure();
        structure.fair_value_gaps.push(FairValueGap {
            direction: GapDirection::Bullish,
            upper: 99.9,
            lower: 99.7,
            origin_index: 10,
            filled: false,
            strength: 20.0,
        });
        let inputs = bare_inputs(&structure);
        // Price 100.0, gap edge 99.9: distance 0.1 ≤ 0.5% of 100.
        let result = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(result.bullish_score, 5.0);

        // Filled gaps carry no vote.
        structure.fair_value_gaps[0].filled = true;
        let result = evaluate(&bare_inputs(&structure), &RuleSet::basic());
        assert_eq!(result.bullish_score, 0.0);
    }

    #[test]
    fn order_block_and_sweep_rules() {
        let mut structure = empty_structure();
        structure.order_blocks.push(OrderBlock {
            direction: BlockDirection::Demand,
            upper: 100.2,
            lower: 99.5,
            volume: 3000.0,
            origin_index: 7,
            tested: false,
            strength: 2.5,
        });
        structure.liquidity_zones.push(LiquidityZone {
            direction: LiquiditySide::SellSide,
            price: 99.0,
            strength: 2.0,
            origin_index: 4,
            swept: true,
        });
        let result = evaluate(&bare_inputs(&structure), &RuleSet::basic());
        // Demand block (5) + sell-side sweep (4), both bullish.
        assert_eq!(result.bullish_score, 9.0);
        assert_eq!(result.confluence_score, 9.0);
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn context_rules_raise_confluence_not_tallies() {
        let mut structure = empty_structure();
        structure.volume = Some(VolumeLevel::High);
        let mut inputs = bare_inputs(&structure);
        inputs.session_active = true;

        let basic = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(basic.bullish_score, 0.0);
        assert_eq!(basic.confluence_score, 2.0); // volume only; basic has no session rule

        let enhanced = evaluate(&inputs, &RuleSet::enhanced());
        assert_eq!(enhanced.confluence_score, 4.0);
    }

    #[test]
    fn confidence_floor_and_clamp() {
        let structure = empty_structure();
        let mut inputs = bare_inputs(&structure);
        // One-sided evidence: RSI + EMA trend + pivot.
        inputs.rsi = Some(20.0);
        inputs.ema_fast = Some(101.0);
        inputs.ema_slow = Some(100.0);
        inputs.pivot = Some(99.0);

        let ruleset = RuleSet::basic();
        let result = evaluate(&inputs, &ruleset);
        // base 100, boost min(12*0.5, 10) = 6 → clamped to confidence_max.
        assert_eq!(result.confluence_score, 12.0);
        assert_eq!(result.confidence, ruleset.confidence_max);
        assert!(result.confidence <= 100.0);
    }

    #[test]
    fn conflicting_evidence_lowers_confidence() {
        let structure = empty_structure();
        let mut inputs = bare_inputs(&structure);
        inputs.rsi = Some(20.0); // bullish 6
        inputs.ema_fast = Some(99.0); // bearish 4
        inputs.ema_slow = Some(100.0);
        let result = evaluate(&inputs, &RuleSet::basic());
        assert_eq!(result.bullish_score, 6.0);
        assert_eq!(result.bearish_score, 4.0);
        // base 60 + boost 5 = 65, below the floor trigger path's reach.
        assert!((result.confidence - 65.0).abs() < 1e-9);
    }
}
