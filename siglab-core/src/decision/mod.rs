//! Decision layer — maps a confluence result to a discrete signal and
//! derives the risk levels that go with it.

pub mod classifier;
pub mod targets;

pub use classifier::classify;
pub use targets::{derive_targets, TradeTargets};
