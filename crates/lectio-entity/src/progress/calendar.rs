//! Calendar display view.

use serde::{Deserialize, Serialize};

use lectio_core::types::LocalDate;

/// One cell of the reading calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The local calendar day.
    pub date: LocalDate,
    /// Whether a completed session exists on this day.
    pub completed: bool,
    /// Total minutes read across all sessions on this day.
    pub minutes: u32,
}
