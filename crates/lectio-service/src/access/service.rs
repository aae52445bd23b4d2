//! Feature-access service.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use lectio_core::config::access::AccessConfig;
use lectio_core::types::ActorId;
use lectio_entity::access::FeatureAccess;
use lectio_entity::actor::ActorRole;

use crate::access::resolver::resolve_features;
use crate::repository::SubscriptionRepository;

/// Resolves premium feature access for actors.
///
/// This service never fails: a subscription lookup error is logged and the
/// actor is resolved as non-premium, matching how absent records resolve.
#[derive(Clone)]
pub struct AccessService {
    /// Subscription repository.
    subscriptions: Arc<dyn SubscriptionRepository>,
    /// Access settings (pilot-phase flag).
    access: AccessConfig,
}

impl AccessService {
    /// Creates a new access service.
    pub fn new(subscriptions: Arc<dyn SubscriptionRepository>, access: AccessConfig) -> Self {
        Self {
            subscriptions,
            access,
        }
    }

    /// Resolve the feature access for `actor` at `now`.
    pub async fn access_for(
        &self,
        actor: &ActorId,
        role: ActorRole,
        now: DateTime<Utc>,
    ) -> FeatureAccess {
        let subscription = match self.subscriptions.find_by_actor(actor).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    actor = %actor,
                    error = %e,
                    "Subscription lookup failed; resolving as non-premium"
                );
                None
            }
        };

        resolve_features(
            subscription.as_ref(),
            role,
            self.access.pilot_phase,
            now,
        )
    }
}
