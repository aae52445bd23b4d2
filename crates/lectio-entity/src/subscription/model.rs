//! Stored subscription state entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::{SubscriptionStatus, SubscriptionTier};

/// A parent's stored subscription record, read-only to the progress engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionState {
    /// Billing status.
    pub status: SubscriptionStatus,
    /// Subscribed plan.
    pub tier: SubscriptionTier,
    /// End of the free trial, if one was ever started.
    pub trial_end: Option<DateTime<Utc>>,
}

impl SubscriptionState {
    /// A free-plan record with no trial, the state of a fresh account.
    pub fn free() -> Self {
        Self {
            status: SubscriptionStatus::Active,
            tier: SubscriptionTier::Free,
            trial_end: None,
        }
    }

    /// Whether the trial window is still open at `now`.
    pub fn trial_active_at(&self, now: DateTime<Utc>) -> bool {
        self.trial_end.is_some_and(|end| end > now)
    }
}
