//! Repository seams to the external data layer.
//!
//! The document store and authentication provider are external
//! collaborators. These traits are the whole boundary: the services ask for
//! a bounded window of records and never write back through them.

use async_trait::async_trait;

use lectio_core::AppResult;
use lectio_core::types::{ActorId, LocalDate};
use lectio_entity::activity::ActivitySession;
use lectio_entity::subscription::SubscriptionState;

/// Read access to an actor's recorded activity sessions.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync + 'static {
    /// Fetch all sessions for `actor` with dates in `from..=to`.
    async fn sessions_in_window(
        &self,
        actor: &ActorId,
        from: LocalDate,
        to: LocalDate,
    ) -> AppResult<Vec<ActivitySession>>;
}

/// Read access to a parent's stored subscription record.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync + 'static {
    /// Fetch the subscription for `actor`, if one exists.
    async fn find_by_actor(&self, actor: &ActorId) -> AppResult<Option<SubscriptionState>>;
}
