//! Progress summary service.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use lectio_core::AppError;
use lectio_core::config::program::ProgramConfig;
use lectio_core::config::tiers::TiersConfig;
use lectio_core::types::{ActorId, LocalDate};
use lectio_entity::progress::ProgressSummary;

use crate::progress::calendar::build_calendar;
use crate::progress::streak::derive_streak_state;
use crate::progress::tier::{resolve_tier, rolling_average};
use crate::repository::ActivityLogRepository;

/// Derives the full progress view for an actor.
///
/// One fetch covers both consumers of the activity window: the calendar
/// display (6 weeks by default) and the rolling-average tier calculation
/// (14 days by default).
#[derive(Clone)]
pub struct ProgressService {
    /// Activity log repository.
    activity_log: Arc<dyn ActivityLogRepository>,
    /// Program settings.
    program: ProgramConfig,
    /// Tier tables.
    tiers: TiersConfig,
}

impl ProgressService {
    /// Creates a new progress service.
    pub fn new(
        activity_log: Arc<dyn ActivityLogRepository>,
        program: ProgramConfig,
        tiers: TiersConfig,
    ) -> Self {
        Self {
            activity_log,
            program,
            tiers,
        }
    }

    /// Compute the progress summary for `actor` as of `today` in the
    /// actor's local calendar.
    pub async fn summary(
        &self,
        actor: &ActorId,
        today: LocalDate,
    ) -> Result<ProgressSummary, AppError> {
        let window_days = (self.program.calendar_window_weeks * 7)
            .max(self.program.average_window_days)
            .max(1);
        let from = today
            .days_back(window_days - 1)
            .ok_or_else(|| AppError::internal("Activity window start is out of range"))?;

        let sessions = self
            .activity_log
            .sessions_in_window(actor, from, today)
            .await?;

        let mut completed: BTreeSet<LocalDate> = BTreeSet::new();
        let mut minutes_by_date: BTreeMap<LocalDate, u32> = BTreeMap::new();
        for session in &sessions {
            *minutes_by_date.entry(session.date).or_insert(0) += session.duration_minutes;
            if session.completed {
                completed.insert(session.date);
            }
        }

        let streak = derive_streak_state(&completed, today, self.program.streak_cap_days);
        let streak_tier = resolve_tier(f64::from(streak.current), &self.tiers.streak);

        let average_minutes_per_day =
            rolling_average(&minutes_by_date, today, self.program.average_period_days);
        let average_tier = resolve_tier(average_minutes_per_day, &self.tiers.average);

        let calendar = build_calendar(
            &minutes_by_date,
            &completed,
            today,
            self.program.calendar_window_weeks,
        );

        tracing::debug!(
            actor = %actor,
            sessions = sessions.len(),
            streak = streak.current,
            average = average_minutes_per_day,
            "Derived progress summary"
        );

        Ok(ProgressSummary {
            streak,
            streak_tier,
            average_minutes_per_day,
            average_tier,
            calendar,
        })
    }
}
