//! SigLab CLI — analyze candle data and export strategy scripts.
//!
//! Commands:
//! - `analyze` — run the full pipeline over a CSV of candles and print the
//!   signal summary plus the analysis as JSON
//! - `export` — render the configured strategy as a Pine Script overlay

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use siglab_core::domain::Candle;
use siglab_core::export::render_pine_script;
use siglab_core::indicators::active_sessions;
use siglab_core::{analyze, Analysis, StrategyConfig};

#[derive(Parser)]
#[command(
    name = "siglab",
    about = "SigLab CLI — confluence-based signal analysis over OHLCV data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis pipeline over a CSV of candles.
    Analyze {
        /// Path to a CSV file with columns: timestamp,open,high,low,close,volume.
        /// Timestamps are RFC 3339.
        #[arg(long)]
        data: PathBuf,

        /// Path to a TOML config file (partial files allowed; missing keys
        /// take their defaults).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Named preset: basic, enhanced.
        #[arg(long)]
        preset: Option<String>,

        /// Evaluation time (RFC 3339) for the session clock. Defaults to now.
        #[arg(long)]
        at: Option<String>,

        /// Print only the signal summary, not the full JSON.
        #[arg(long, default_value_t = false)]
        summary: bool,
    },
    /// Render the configured strategy as Pine Script.
    Export {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Named preset: basic, enhanced.
        #[arg(long)]
        preset: Option<String>,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            data,
            config,
            preset,
            at,
            summary,
        } => run_analyze(&data, config.as_deref(), preset.as_deref(), at.as_deref(), summary),
        Commands::Export {
            config,
            preset,
            output,
        } => run_export(config.as_deref(), preset.as_deref(), output.as_deref()),
    }
}

fn run_analyze(
    data: &Path,
    config_path: Option<&Path>,
    preset: Option<&str>,
    at: Option<&str>,
    summary_only: bool,
) -> Result<()> {
    let config = resolve_config(config_path, preset)?;
    let candles = load_candles(data)?;
    if candles.is_empty() {
        bail!("no candles in {}", data.display());
    }

    let now = match at {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid --at timestamp '{s}'"))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let analysis = analyze(&candles, &config, now)?;
    print_summary(&analysis, &config, candles.len(), now);

    if !summary_only {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    }
    Ok(())
}

fn run_export(
    config_path: Option<&Path>,
    preset: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let config = resolve_config(config_path, preset)?;
    let script = render_pine_script(&config);

    match output {
        Some(path) => {
            std::fs::write(path, &script)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Script written to: {}", path.display());
        }
        None => print!("{script}"),
    }
    Ok(())
}

fn resolve_config(config_path: Option<&Path>, preset: Option<&str>) -> Result<StrategyConfig> {
    if config_path.is_some() && preset.is_some() {
        bail!("--config and --preset are mutually exclusive");
    }
    if let Some(path) = config_path {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        return toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()));
    }
    if let Some(name) = preset {
        return StrategyConfig::preset(name)
            .with_context(|| format!("unknown preset '{name}'. Valid: basic, enhanced"));
    }
    Ok(StrategyConfig::basic())
}

fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut candles = Vec::new();
    for (i, record) in reader.deserialize().enumerate() {
        let candle: Candle =
            record.with_context(|| format!("bad candle record at row {}", i + 1))?;
        candles.push(candle);
    }
    Ok(candles)
}

fn print_summary(
    analysis: &Analysis,
    config: &StrategyConfig,
    candle_count: usize,
    now: DateTime<Utc>,
) {
    println!("Candles analyzed:  {candle_count}");
    println!("Config hash:       {}", config.config_hash());
    if analysis.session_active {
        let names: Vec<String> = active_sessions(now)
            .iter()
            .map(|s| format!("{s:?}"))
            .collect();
        println!("Session active:    yes ({})", names.join(", "));
    } else {
        println!("Session active:    no");
    }

    let c = &analysis.confluence;
    println!(
        "Confluence:        bull {:.1} / bear {:.1} (total {:.1})",
        c.bullish_score, c.bearish_score, c.confluence_score
    );
    println!("Confidence:        {:.1}", c.confidence);
    for reason in &c.reasons {
        println!("  - {reason}");
    }

    match &analysis.signal {
        Some(signal) => {
            println!("Signal:            {:?} @ {:.5}", signal.kind, signal.price);
            if let Some(sl) = signal.stop_loss {
                println!("Stop loss:         {sl:.5}");
            }
            if let Some(tp) = signal.take_profit {
                println!("Take profit:       {tp:.5}");
            }
            if let Some(ts) = signal.trailing_stop {
                println!("Trailing stop:     {ts:.5}");
            }
            if let Some(rr) = signal.risk_reward {
                println!("Risk/reward:       {rr:.2}");
            }
        }
        None => println!("Signal:            none (no data)"),
    }
}
