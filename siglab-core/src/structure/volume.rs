//! Relative-volume context for the most recent candle.

use crate::domain::Candle;
use serde::{Deserialize, Serialize};

const LOOKBACK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeLevel {
    High,
    Medium,
    Low,
}

/// Compare the last candle's volume to the mean of the last 10 candles:
/// >1.3x high, >0.7x medium, else low. `None` when fewer than 10 candles or
/// the mean is zero (absent evidence).
pub fn classify_volume(candles: &[Candle]) -> Option<VolumeLevel> {
    if candles.len() < LOOKBACK {
        return None;
    }
    let window = &candles[candles.len() - LOOKBACK..];
    let mean: f64 = window.iter().map(|c| c.volume).sum::<f64>() / LOOKBACK as f64;
    if mean <= 0.0 {
        return None;
    }

    let ratio = candles.last()?.volume / mean;
    Some(if ratio > 1.3 {
        VolumeLevel::High
    } else if ratio > 0.7 {
        VolumeLevel::Medium
    } else {
        VolumeLevel::Low
    })
}
