//! Domain types — candles, indicator points, signals.
//!
//! Everything downstream (indicators, structure detection, confluence scoring)
//! consumes these types. All are serde-serializable so a presentation layer
//! can render pipeline output without recomputation.

pub mod candle;
pub mod point;
pub mod signal;

pub use candle::{validate_candles, Candle, CandleError};
pub use point::{latest, IndicatorPoint};
pub use signal::{Signal, SignalKind};
