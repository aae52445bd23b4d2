//! Tier threshold tables.
//!
//! Thresholds and labels are configuration data, not hard-coded branches.
//! Each table is an ordered list evaluated from highest threshold to
//! lowest; adding a tier is a config change, not a code change.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One row of a tier table: the minimum metric value that earns the tier,
/// plus display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    /// Minimum metric value (inclusive) for this tier.
    pub min: f64,
    /// Display label shown to the actor.
    pub label: String,
    /// Icon token the presentation layer maps to artwork.
    #[serde(default)]
    pub icon: String,
}

/// The two tier tables used by the program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TiersConfig {
    /// Tiers on the current streak length, in days.
    #[serde(default = "default_streak_tiers")]
    pub streak: Vec<TierEntry>,
    /// Tiers on the rolling-average minutes read per day.
    #[serde(default = "default_average_tiers")]
    pub average: Vec<TierEntry>,
}

impl TiersConfig {
    /// Validate both tables: non-empty, sorted descending by threshold,
    /// with a baseline entry at zero so every metric value resolves.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_table("tiers.streak", &self.streak)?;
        validate_table("tiers.average", &self.average)?;
        Ok(())
    }
}

fn validate_table(name: &str, table: &[TierEntry]) -> Result<(), AppError> {
    let Some(last) = table.last() else {
        return Err(AppError::configuration(format!("{name} must not be empty")));
    };
    if last.min != 0.0 {
        return Err(AppError::configuration(format!(
            "{name} must end with a baseline entry at min = 0"
        )));
    }
    for pair in table.windows(2) {
        if pair[0].min <= pair[1].min {
            return Err(AppError::configuration(format!(
                "{name} must be sorted by descending min: {} is not above {}",
                pair[0].min, pair[1].min
            )));
        }
    }
    Ok(())
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            streak: default_streak_tiers(),
            average: default_average_tiers(),
        }
    }
}

fn entry(min: f64, label: &str, icon: &str) -> TierEntry {
    TierEntry {
        min,
        label: label.to_string(),
        icon: icon.to_string(),
    }
}

fn default_streak_tiers() -> Vec<TierEntry> {
    vec![
        entry(100.0, "Legendary", "crown"),
        entry(30.0, "Devoted", "flame"),
        entry(7.0, "Committed", "star"),
        entry(3.0, "Kindling", "spark"),
        entry(0.0, "Beginning", "seed"),
    ]
}

fn default_average_tiers() -> Vec<TierEntry> {
    vec![
        entry(46.0, "Radiant", "sun"),
        entry(31.0, "Flourishing", "tree"),
        entry(16.0, "Growing", "sprout"),
        entry(0.0, "Sprouting", "seed"),
    ]
}
