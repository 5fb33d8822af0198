//! Trading-session predicate over an injected clock.
//!
//! Approximates the Tokyo, London, and New York sessions as fixed UTC
//! wall-clock windows. Purely a function of the `now` the caller passes in;
//! the core never reads the system clock, so tests inject a fixed time.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// The three major sessions, each a half-open UTC hour window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    Tokyo,
    London,
    NewYork,
}

impl Session {
    /// UTC hour window as `[start, end)`.
    pub fn hours(&self) -> (u32, u32) {
        match self {
            Self::Tokyo => (0, 9),
            Self::London => (8, 17),
            Self::NewYork => (13, 22),
        }
    }

    /// True if the given instant falls inside this session's window.
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        let (start, end) = self.hours();
        let hour = now.hour();
        hour >= start && hour < end
    }
}

/// True if any major session is active at `now`.
pub fn session_active(now: DateTime<Utc>) -> bool {
    [Session::Tokyo, Session::London, Session::NewYork]
        .iter()
        .any(|s| s.contains(now))
}

/// All sessions active at `now`, in fixed Tokyo/London/NewYork order.
pub fn active_sessions(now: DateTime<Utc>) -> Vec<Session> {
    [Session::Tokyo, Session::London, Session::NewYork]
        .into_iter()
        .filter(|s| s.contains(now))
        .collect()
}
