//! Reading calendar construction.

use std::collections::{BTreeMap, BTreeSet};

use lectio_core::types::LocalDate;
use lectio_entity::progress::CalendarDay;

/// Build the calendar cells for a `weeks`-wide window ending at `today`,
/// oldest day first. Days without sessions appear as empty cells so the
/// grid is always fully populated.
pub fn build_calendar(
    minutes_by_date: &BTreeMap<LocalDate, u32>,
    completed: &BTreeSet<LocalDate>,
    today: LocalDate,
    weeks: u32,
) -> Vec<CalendarDay> {
    let total_days = weeks * 7;
    let mut days = Vec::with_capacity(total_days as usize);
    let mut cursor = Some(today);
    for _ in 0..total_days {
        let Some(date) = cursor else { break };
        days.push(CalendarDay {
            date,
            completed: completed.contains(&date),
            minutes: minutes_by_date.get(&date).copied().unwrap_or(0),
        });
        cursor = date.pred();
    }
    days.reverse();
    days
}
