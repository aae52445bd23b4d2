//! Aggregated progress summary.

use serde::{Deserialize, Serialize};

use super::calendar::CalendarDay;
use super::streak::StreakState;
use super::tier::TierAssignment;

/// Everything the progress displays need for one actor, derived fresh from
/// a single fetch of the activity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Streak statistics.
    pub streak: StreakState,
    /// Tier earned by the current streak length.
    pub streak_tier: TierAssignment,
    /// Rolling-average minutes read per day over the trailing period.
    pub average_minutes_per_day: f64,
    /// Tier earned by the rolling average.
    pub average_tier: TierAssignment,
    /// Calendar cells covering the display window, oldest first, ending
    /// today.
    pub calendar: Vec<CalendarDay>,
}
