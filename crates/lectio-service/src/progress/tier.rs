//! Tier resolution and the rolling-average metric.

use std::collections::BTreeMap;

use lectio_core::config::tiers::TierEntry;
use lectio_core::types::LocalDate;
use lectio_entity::progress::TierAssignment;

/// Resolve a metric value against an ordered tier table.
///
/// The table is evaluated from highest threshold to lowest; the first entry
/// whose `min` the metric meets or exceeds wins, falling back to the last
/// (baseline) entry. With a table that [`lectio_core::config::tiers`]
/// validation accepts, a larger metric never resolves to a lower tier.
pub fn resolve_tier(metric: f64, table: &[TierEntry]) -> TierAssignment {
    table
        .iter()
        .find(|entry| metric >= entry.min)
        .or_else(|| table.last())
        .map(|entry| TierAssignment {
            label: entry.label.clone(),
            icon: entry.icon.clone(),
            min: entry.min,
        })
        .unwrap_or_default()
}

/// Mean minutes per day over the trailing `period_days` calendar days
/// ending at `today`.
///
/// The divisor is exactly `period_days`, not the count of active days, so
/// days without any session dilute the average toward the lowest tier.
pub fn rolling_average(
    minutes_by_date: &BTreeMap<LocalDate, u32>,
    today: LocalDate,
    period_days: u32,
) -> f64 {
    if period_days == 0 {
        return 0.0;
    }

    let mut total: u64 = 0;
    let mut cursor = Some(today);
    for _ in 0..period_days {
        let Some(date) = cursor else { break };
        total += u64::from(minutes_by_date.get(&date).copied().unwrap_or(0));
        cursor = date.pred();
    }
    total as f64 / f64::from(period_days)
}
