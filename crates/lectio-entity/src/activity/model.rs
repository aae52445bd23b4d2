//! Recorded reading session entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lectio_core::types::{ActivitySessionId, ActorId, LocalDate};

/// One recorded reading session for an actor.
///
/// Sessions are written once when the reading timer ends and are never
/// mutated afterward; the progress engine only reads a bounded historical
/// window of them. For streak purposes only the *existence* of a completed
/// session on a date matters — a second session on the same day never
/// extends the streak by more than that day's credit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivitySession {
    /// Session identifier.
    pub id: ActivitySessionId,
    /// The student or parent who read.
    pub actor_id: ActorId,
    /// The local calendar day the session happened on.
    pub date: LocalDate,
    /// Minutes spent reading.
    pub duration_minutes: u32,
    /// Whether the session met the program's completion threshold.
    pub completed: bool,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl ActivitySession {
    /// Record a finished session, classifying it against the configured
    /// completion threshold in minutes.
    pub fn record(
        actor_id: ActorId,
        date: LocalDate,
        duration_minutes: u32,
        threshold_minutes: u32,
    ) -> Self {
        Self {
            id: ActivitySessionId::new(),
            actor_id,
            date,
            duration_minutes,
            completed: duration_minutes >= threshold_minutes,
            created_at: Utc::now(),
        }
    }
}
