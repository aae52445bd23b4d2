//! Derived streak state.

use serde::{Deserialize, Serialize};

/// Consecutive-day reading statistics derived from one activity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive days ending today or yesterday with at least one
    /// completed session. Yesterday still counts because the actor can
    /// extend the run by reading today.
    pub current: u32,
    /// Longest consecutive run anywhere inside the fetched window.
    pub longest: u32,
    /// Total days in the window with at least one completed session.
    pub total_days: u32,
}

impl StreakState {
    /// The empty state: no completed days in the window.
    pub fn empty() -> Self {
        Self {
            current: 0,
            longest: 0,
            total_days: 0,
        }
    }
}
