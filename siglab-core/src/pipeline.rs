//! The analysis pipeline — candles in, full `Analysis` out.
//!
//! One pass: validate input, precompute every indicator series, detect
//! structure, score confluence, classify, derive risk levels. All
//! intermediate series ride along in the output so a presentation layer
//! renders without recomputation. Deterministic for a given
//! (candles, config, now) triple; `now` feeds only the session predicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::StrategyConfig;
use crate::confluence::{self, ConfluenceInputs, ConfluenceResult, RuleSet};
use crate::decision::{classify, derive_targets};
use crate::domain::{
    latest, validate_candles, Candle, CandleError, IndicatorPoint, Signal, SignalKind,
};
use crate::indicators::{
    adx, atr, bollinger_bands, classify_regime, classify_volatility, ema, macd, pivot_points,
    rsi, session_active, sma, AdxOutput, BollingerPoint, MacdOutput, MarketRegime, PivotPoints,
    VolatilityLevel,
};
use crate::structure::{
    classify_volume, detect_fair_value_gaps, detect_liquidity_zones, detect_order_blocks,
    microstructure_bias, StructureSnapshot,
};

pub const SMA_PERIOD: usize = 20;
pub const EMA_FAST_PERIOD: usize = 12;
pub const EMA_SLOW_PERIOD: usize = 26;
pub const RSI_PERIOD: usize = 14;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_MULTIPLIER: f64 = 2.0;
pub const ADX_PERIOD: usize = 14;
pub const ATR_PERIOD: usize = 14;

/// Every indicator series the pipeline computes, plus the derived
/// classifications of the latest readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub sma: Vec<IndicatorPoint>,
    pub ema_fast: Vec<IndicatorPoint>,
    pub ema_slow: Vec<IndicatorPoint>,
    pub rsi: Vec<IndicatorPoint>,
    pub macd: MacdOutput,
    pub bollinger: Vec<BollingerPoint>,
    pub adx: AdxOutput,
    pub atr: Vec<IndicatorPoint>,
    pub pivots: Option<PivotPoints>,
    pub regime: Option<MarketRegime>,
    pub volatility: Option<VolatilityLevel>,
}

/// Full pipeline output: the signal plus everything that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// `None` only for an empty candle sequence (no price to anchor to).
    pub signal: Option<Signal>,
    pub confluence: ConfluenceResult,
    pub indicators: IndicatorSnapshot,
    pub structure: StructureSnapshot,
    pub session_active: bool,
}

/// Run the full pipeline.
///
/// Rejects malformed input (the only error); short input degrades to empty
/// series, an empty-evidence confluence result, and a Hold signal.
pub fn analyze(
    candles: &[Candle],
    config: &StrategyConfig,
    now: DateTime<Utc>,
) -> Result<Analysis, CandleError> {
    validate_candles(candles)?;

    let in_session = session_active(now);

    let indicators = IndicatorSnapshot {
        sma: sma(candles, SMA_PERIOD),
        ema_fast: ema(candles, EMA_FAST_PERIOD),
        ema_slow: ema(candles, EMA_SLOW_PERIOD),
        rsi: rsi(candles, RSI_PERIOD),
        macd: macd(candles),
        bollinger: bollinger_bands(candles, BOLLINGER_PERIOD, BOLLINGER_MULTIPLIER),
        adx: adx(candles, ADX_PERIOD),
        atr: atr(candles, ATR_PERIOD),
        pivots: pivot_points(candles),
        regime: None,
        volatility: None,
    };

    let last = match candles.last() {
        Some(c) => c,
        None => {
            return Ok(Analysis {
                signal: None,
                confluence: ConfluenceResult::default(),
                indicators,
                structure: StructureSnapshot::default(),
                session_active: in_session,
            });
        }
    };
    let price = last.close;

    let mut indicators = indicators;
    indicators.regime = latest(&indicators.adx.adx).map(classify_regime);
    indicators.volatility = latest(&indicators.atr).map(|a| classify_volatility(a, price));

    let fair_value_gaps = detect_fair_value_gaps(candles, config.fvg_min_gap);
    let order_blocks = detect_order_blocks(candles, config.order_block_volume_multiplier);
    let liquidity_zones = detect_liquidity_zones(candles, config.liquidity_tolerance);
    let structure = StructureSnapshot {
        bias: microstructure_bias(candles, &fair_value_gaps, &order_blocks),
        volume: classify_volume(candles),
        fair_value_gaps,
        order_blocks,
        liquidity_zones,
    };

    let histogram = &indicators.macd.histogram;
    // RSI emits nothing for dead-flat windows, so its series can end before
    // the last candle; only a reading on the latest candle counts as current
    // evidence.
    let current_rsi = indicators
        .rsi
        .last()
        .filter(|p| p.timestamp == last.timestamp)
        .map(|p| p.value);

    let inputs = ConfluenceInputs {
        price,
        rsi: current_rsi,
        macd_histogram: latest(histogram),
        prev_macd_histogram: histogram
            .len()
            .checked_sub(2)
            .map(|i| histogram[i].value),
        ema_fast: latest(&indicators.ema_fast),
        ema_slow: latest(&indicators.ema_slow),
        bollinger: indicators.bollinger.last().copied(),
        adx: latest(&indicators.adx.adx),
        plus_di: latest(&indicators.adx.plus_di),
        minus_di: latest(&indicators.adx.minus_di),
        pivot: indicators.pivots.map(|p| p.pivot),
        structure: &structure,
        session_active: in_session,
        proximity_pct: config.structure_proximity_pct,
    };

    let ruleset = RuleSet::for_choice(config.rule_set);
    let confluence = confluence::evaluate(&inputs, &ruleset);

    let kind = classify(&confluence, config);
    let signal = if kind == SignalKind::Hold {
        Signal::hold(price, last.timestamp)
    } else {
        let targets = derive_targets(
            kind,
            price,
            latest(&indicators.atr),
            &structure.fair_value_gaps,
            &structure.order_blocks,
            &structure.liquidity_zones,
            config,
        );
        Signal {
            kind,
            price,
            timestamp: last.timestamp,
            stop_loss: targets.stop_loss,
            take_profit: targets.take_profit,
            trailing_stop: targets.trailing_stop,
            risk_reward: targets.risk_reward,
        }
    };

    Ok(Analysis {
        signal: Some(signal),
        confluence,
        indicators,
        structure,
        session_active: in_session,
    })
}
