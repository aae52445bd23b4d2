//! Derived progress views.
//!
//! Nothing in this module is persisted — every type is recomputed from the
//! activity window on demand.

pub mod calendar;
pub mod streak;
pub mod summary;
pub mod tier;

pub use calendar::CalendarDay;
pub use streak::StreakState;
pub use summary::ProgressSummary;
pub use tier::TierAssignment;
