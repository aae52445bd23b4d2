//! Shared test helpers: in-memory repository fakes.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use lectio_core::types::{ActorId, LocalDate};
use lectio_core::{AppError, AppResult};
use lectio_entity::activity::ActivitySession;
use lectio_entity::subscription::SubscriptionState;
use lectio_service::repository::{ActivityLogRepository, SubscriptionRepository};

/// In-memory activity log.
#[derive(Default)]
pub struct InMemoryActivityLog {
    sessions: Mutex<Vec<ActivitySession>>,
}

impl InMemoryActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one session, classified against a 20-minute threshold.
    pub fn add_session(&self, actor: ActorId, date: &str, minutes: u32) {
        let date: LocalDate = date.parse().expect("test date should be canonical");
        self.sessions
            .lock()
            .unwrap()
            .push(ActivitySession::record(actor, date, minutes, 20));
    }

    /// Record a completed session on each of `days` consecutive days ending
    /// at `last`.
    pub fn add_daily_run(&self, actor: ActorId, last: &str, days: u32) {
        let mut cursor: LocalDate = last.parse().expect("test date should be canonical");
        for _ in 0..days {
            self.sessions
                .lock()
                .unwrap()
                .push(ActivitySession::record(actor, cursor, 25, 20));
            cursor = cursor.pred().expect("date underflow in test");
        }
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLog {
    async fn sessions_in_window(
        &self,
        actor: &ActorId,
        from: LocalDate,
        to: LocalDate,
    ) -> AppResult<Vec<ActivitySession>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.actor_id == *actor && s.date >= from && s.date <= to)
            .cloned()
            .collect())
    }
}

/// In-memory subscription store, optionally failing every lookup.
#[derive(Default)]
pub struct InMemorySubscriptions {
    records: Mutex<HashMap<ActorId, SubscriptionState>>,
    failing: bool,
}

impl InMemorySubscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every lookup fails, for degradation tests.
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            failing: true,
        }
    }

    pub fn insert(&self, actor: ActorId, state: SubscriptionState) {
        self.records.lock().unwrap().insert(actor, state);
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn find_by_actor(&self, actor: &ActorId) -> AppResult<Option<SubscriptionState>> {
        if self.failing {
            return Err(AppError::subscription("Subscription store unavailable"));
        }
        Ok(self.records.lock().unwrap().get(actor).cloned())
    }
}
