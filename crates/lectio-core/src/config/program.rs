//! Reading-program configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Tunable parameters of the reading program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Minimum session length in minutes for a session to count as
    /// completed.
    #[serde(default = "default_completion_threshold")]
    pub completion_threshold_minutes: u32,
    /// Maximum number of days the streak walk will cover. Bounds the
    /// backward walk on corrupted or adversarial data; streaks are never
    /// reported above this value.
    #[serde(default = "default_streak_cap")]
    pub streak_cap_days: u32,
    /// Width of the calendar display window, in weeks.
    #[serde(default = "default_calendar_weeks")]
    pub calendar_window_weeks: u32,
    /// Width of the activity fetch window used for rolling-average tier
    /// calculation, in days.
    #[serde(default = "default_average_window")]
    pub average_window_days: u32,
    /// Number of trailing days the rolling average is taken over. Days
    /// without activity count as zero minutes.
    #[serde(default = "default_average_period")]
    pub average_period_days: u32,
}

impl ProgramConfig {
    /// Validate window relationships.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.average_period_days == 0 {
            return Err(AppError::configuration(
                "program.average_period_days must be at least 1",
            ));
        }
        if self.average_period_days > self.average_window_days {
            return Err(AppError::configuration(format!(
                "program.average_period_days ({}) exceeds program.average_window_days ({})",
                self.average_period_days, self.average_window_days
            )));
        }
        Ok(())
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            completion_threshold_minutes: default_completion_threshold(),
            streak_cap_days: default_streak_cap(),
            calendar_window_weeks: default_calendar_weeks(),
            average_window_days: default_average_window(),
            average_period_days: default_average_period(),
        }
    }
}

fn default_completion_threshold() -> u32 {
    20
}

fn default_streak_cap() -> u32 {
    365
}

fn default_calendar_weeks() -> u32 {
    6
}

fn default_average_window() -> u32 {
    14
}

fn default_average_period() -> u32 {
    7
}
