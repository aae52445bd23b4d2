//! Feature-access resolution.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use lectio_entity::access::FeatureAccess;
use lectio_entity::actor::ActorRole;
use lectio_entity::subscription::{SubscriptionState, SubscriptionStatus, SubscriptionTier};

/// The premium feature set, keyed by name.
pub const PREMIUM_FEATURES: [&str; 4] = [
    "habit_tracking",
    "family_competition",
    "advanced_analytics",
    "custom_goals",
];

const MS_PER_DAY: i64 = 86_400_000;

const PILOT_MESSAGE: &str =
    "All premium features are free during the pilot program. Enjoy!";
const UPGRADE_MESSAGE: &str =
    "Upgrade to premium to unlock habit tracking, family competitions, and more.";

/// Resolve the feature access for one actor at one point in time.
///
/// When `pilot_phase` is set the resolution is unconditional: every actor
/// gets premium trial access regardless of any stored subscription. Outside
/// the pilot, only a parent's subscription record grants anything — premium
/// requires an active premium subscription, and an unexpired trial forces
/// premium on for the remainder of the trial window.
///
/// Missing or inapplicable subscription data is never an error; the
/// resolver degrades to the restrictive default with the upgrade prompt.
pub fn resolve_features(
    subscription: Option<&SubscriptionState>,
    role: ActorRole,
    pilot_phase: bool,
    now: DateTime<Utc>,
) -> FeatureAccess {
    if pilot_phase {
        return FeatureAccess {
            premium: true,
            trial: true,
            tier: SubscriptionTier::Premium,
            features: mirror_premium(true),
            message: PILOT_MESSAGE.to_string(),
        };
    }

    let Some(sub) = subscription.filter(|_| role.holds_subscription()) else {
        return denied();
    };

    let mut premium =
        sub.status == SubscriptionStatus::Active && sub.tier == SubscriptionTier::Premium;
    let mut trial = false;
    let mut message = UPGRADE_MESSAGE.to_string();

    if sub.trial_active_at(now) {
        // Trial grants premium for the remaining window even on a free plan.
        premium = true;
        trial = true;
        if let Some(end) = sub.trial_end {
            let days = days_remaining(end, now);
            message = format!(
                "Your free trial ends in {days} day{}. Upgrade to keep your premium features.",
                if days == 1 { "" } else { "s" }
            );
        }
    }

    FeatureAccess {
        premium,
        trial,
        tier: sub.tier,
        features: mirror_premium(premium),
        message,
    }
}

/// Set every named feature flag to the premium bit.
///
/// Access is currently all-or-nothing across features; this is the single
/// place to change when per-feature entitlements arrive.
pub fn mirror_premium(premium: bool) -> BTreeMap<String, bool> {
    PREMIUM_FEATURES
        .iter()
        .map(|name| (name.to_string(), premium))
        .collect()
}

/// The restrictive default: no premium, all flags off, upgrade prompt.
fn denied() -> FeatureAccess {
    FeatureAccess {
        premium: false,
        trial: false,
        tier: SubscriptionTier::Free,
        features: mirror_premium(false),
        message: UPGRADE_MESSAGE.to_string(),
    }
}

/// Whole days until `end`, rounding any partial day up.
fn days_remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let diff_ms = (end - now).num_milliseconds();
    (diff_ms + MS_PER_DAY - 1) / MS_PER_DAY
}
