//! # lectio-entity
//!
//! Domain entity models for the Lectio reading-incentive program:
//! activity sessions, subscription state, actor roles, and the derived
//! progress and access views.

pub mod access;
pub mod activity;
pub mod actor;
pub mod progress;
pub mod subscription;

pub use access::FeatureAccess;
pub use activity::ActivitySession;
pub use actor::ActorRole;
pub use progress::{CalendarDay, ProgressSummary, StreakState, TierAssignment};
pub use subscription::{SubscriptionState, SubscriptionStatus, SubscriptionTier};
