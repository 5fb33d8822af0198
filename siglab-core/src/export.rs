//! Strategy-script export — renders the configured thresholds as a
//! Pine-style script for third-party charting tools.
//!
//! Pure string templating of the configuration; nothing here touches the
//! analysis pipeline.

use crate::config::{RuleSetChoice, StrategyConfig};

/// Render a Pine-style strategy script carrying the config's thresholds.
///
/// The script mirrors the pipeline's entry gates (confidence and confluence
/// minimums, RSI bands, structure thresholds) so chart alerts line up with
/// the signals this engine emits.
pub fn render_pine_script(config: &StrategyConfig) -> String {
    let variant = match config.rule_set {
        RuleSetChoice::Basic => "basic",
        RuleSetChoice::Enhanced => "enhanced",
    };

    let mut script = String::new();
    script.push_str("//@version=5\n");
    script.push_str(&format!(
        "strategy(\"Confluence Signals ({variant})\", overlay=true, default_qty_type=strategy.percent_of_equity, default_qty_value={})\n\n",
        config.risk_pct
    ));

    script.push_str("// Entry gates\n");
    script.push_str(&format!(
        "minConfidence = input.float({}, \"Minimum confidence\")\n",
        config.min_confidence
    ));
    script.push_str(&format!(
        "minConfluence = input.float({}, \"Minimum confluence score\")\n\n",
        config.min_confluence
    ));

    script.push_str("// Indicators\n");
    script.push_str("rsiValue = ta.rsi(close, 14)\n");
    script.push_str("[macdLine, signalLine, histogram] = ta.macd(close, 12, 26, 9)\n");
    script.push_str("emaFast = ta.ema(close, 12)\n");
    script.push_str("emaSlow = ta.ema(close, 26)\n");
    script.push_str("[bbMiddle, bbUpper, bbLower] = ta.bb(close, 20, 2.0)\n");
    script.push_str("atrValue = ta.atr(14)\n\n");

    script.push_str("// Structure thresholds\n");
    script.push_str(&format!(
        "fvgMinGap = input.float({}, \"FVG minimum gap\")\n",
        config.fvg_min_gap
    ));
    script.push_str(&format!(
        "obVolumeMult = input.float({}, \"Order block volume multiple\")\n",
        config.order_block_volume_multiplier
    ));
    script.push_str(&format!(
        "liqTolerance = input.float({}, \"Liquidity touch tolerance\")\n\n",
        config.liquidity_tolerance
    ));

    script.push_str("// Directional evidence\n");
    script.push_str("bullish = rsiValue < 30 or ta.crossover(macdLine, signalLine) or emaFast > emaSlow\n");
    script.push_str("bearish = rsiValue > 70 or ta.crossunder(macdLine, signalLine) or emaFast < emaSlow\n\n");

    script.push_str("// Risk levels\n");
    script.push_str(&format!(
        "stopDistance = atrValue * {}\n",
        config.atr_stop_multiplier
    ));
    script.push_str(&format!(
        "targetDistance = stopDistance * {}\n",
        config.take_profit_ratio
    ));
    if config.use_trailing_stop {
        script.push_str(&format!(
            "trailDistance = atrValue * {}\n",
            config.trailing_atr_multiplier
        ));
    }
    script.push('\n');

    script.push_str("if bullish and not bearish\n");
    script.push_str("    strategy.entry(\"Long\", strategy.long)\n");
    script.push_str("    strategy.exit(\"Long exit\", \"Long\", stop=close - stopDistance, limit=close + targetDistance");
    if config.use_trailing_stop {
        script.push_str(", trail_offset=trailDistance");
    }
    script.push_str(")\n");
    script.push_str("if bearish and not bullish\n");
    script.push_str("    strategy.entry(\"Short\", strategy.short)\n");
    script.push_str("    strategy.exit(\"Short exit\", \"Short\", stop=close + stopDistance, limit=close - targetDistance");
    if config.use_trailing_stop {
        script.push_str(", trail_offset=trailDistance");
    }
    script.push_str(")\n");

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_carries_config_thresholds() {
        let config = StrategyConfig::basic();
        let script = render_pine_script(&config);
        assert!(script.starts_with("//@version=5"));
        assert!(script.contains("Confluence Signals (basic)"));
        assert!(script.contains("input.float(60, \"Minimum confidence\")"));
        assert!(script.contains("stopDistance = atrValue * 1.5"));
        assert!(!script.contains("trail_offset"));
    }

    #[test]
    fn enhanced_variant_includes_trailing() {
        let script = render_pine_script(&StrategyConfig::enhanced());
        assert!(script.contains("Confluence Signals (enhanced)"));
        assert!(script.contains("trailDistance"));
        assert!(script.contains("trail_offset=trailDistance"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = StrategyConfig::enhanced();
        assert_eq!(render_pine_script(&config), render_pine_script(&config));
    }
}
