//! Derived feature-access view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::subscription::SubscriptionTier;

/// The resolved premium access for one actor at one point in time.
///
/// Derived fresh from subscription state on each resolution; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureAccess {
    /// Whether premium features are unlocked.
    pub premium: bool,
    /// Whether access comes from an active trial (or the pilot phase).
    pub trial: bool,
    /// The plan this access was resolved from.
    pub tier: SubscriptionTier,
    /// Per-feature flags keyed by feature name.
    pub features: BTreeMap<String, bool>,
    /// Human-readable status line for the gating UI.
    pub message: String,
}

impl FeatureAccess {
    /// Whether the named feature is enabled.
    pub fn allows(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(false)
    }
}
