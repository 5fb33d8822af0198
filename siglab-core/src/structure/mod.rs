//! Structure detection — smart-money price patterns from a candle window.
//!
//! Fair value gaps, order blocks, liquidity zones, relative-volume context,
//! and a short-horizon microstructure bias. Every detector recomputes from
//! scratch on each call; the one-way latches (`filled`, `tested`, `swept`)
//! hold because later candles can only add evidence, never remove it.
//!
//! Each derived list is capped to the most recent entries (gaps 8, blocks 6,
//! zones 8), oldest dropped first, so "nearness" checks stay anchored to
//! current price action.

pub mod bias;
pub mod fvg;
pub mod liquidity;
pub mod order_block;
pub mod volume;

pub use bias::{microstructure_bias, Bias};
pub use fvg::{detect_fair_value_gaps, FairValueGap, GapDirection};
pub use liquidity::{detect_liquidity_zones, LiquiditySide, LiquidityZone};
pub use order_block::{detect_order_blocks, BlockDirection, OrderBlock};
pub use volume::{classify_volume, VolumeLevel};

/// Caps on derived collections, FIFO by origin index.
pub const MAX_FAIR_VALUE_GAPS: usize = 8;
pub const MAX_ORDER_BLOCKS: usize = 6;
pub const MAX_LIQUIDITY_ZONES: usize = 8;

/// All structural output for one analysis call, bundled for the confluence
/// engine and for presentation-layer rendering.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructureSnapshot {
    pub fair_value_gaps: Vec<FairValueGap>,
    pub order_blocks: Vec<OrderBlock>,
    pub liquidity_zones: Vec<LiquidityZone>,
    pub volume: Option<VolumeLevel>,
    pub bias: Bias,
}
