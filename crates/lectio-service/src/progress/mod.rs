//! Reading progress derivation: streaks, tiers, and the calendar view.

pub mod calendar;
pub mod service;
pub mod streak;
pub mod tier;

pub use calendar::build_calendar;
pub use service::ProgressService;
pub use streak::{compute_streak, derive_streak_state, longest_run};
pub use tier::{resolve_tier, rolling_average};
