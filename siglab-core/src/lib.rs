//! SigLab Core — indicator library, structure detection, confluence scoring,
//! and signal classification over OHLCV candle series.
//!
//! The pipeline is one pure function of its inputs:
//!
//! ```text
//! candles → indicators → {structure detection, confluence scoring}
//!         → signal classification → Analysis
//! ```
//!
//! No I/O, no global state, no wall clock: the session predicate takes an
//! injected `now`, so two calls with identical inputs produce identical
//! output. The crate exposes:
//! - Domain types (candles, indicator points, signals)
//! - Indicator primitives (SMA, EMA, RSI, MACD, Bollinger, ADX, ATR, pivots)
//! - Smart-money structure detectors (FVGs, order blocks, liquidity zones)
//! - The weighted confluence engine with basic/enhanced rule presets
//! - The 7-level signal classifier with structural stop/target derivation

pub mod config;
pub mod confluence;
pub mod decision;
pub mod domain;
pub mod export;
pub mod indicators;
pub mod pipeline;
pub mod structure;

pub use config::{RuleSetChoice, StrategyConfig};
pub use domain::{Candle, CandleError, IndicatorPoint, Signal, SignalKind};
pub use pipeline::{analyze, Analysis, IndicatorSnapshot};
