//! Integration tests for the progress summary service.

mod helpers;

use std::sync::Arc;

use lectio_core::config::program::ProgramConfig;
use lectio_core::config::tiers::TiersConfig;
use lectio_core::types::{ActorId, LocalDate};
use lectio_service::progress::ProgressService;

use helpers::InMemoryActivityLog;

fn service(log: Arc<InMemoryActivityLog>) -> ProgressService {
    ProgressService::new(log, ProgramConfig::default(), TiersConfig::default())
}

fn date(s: &str) -> LocalDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_summary_for_actor_with_no_history() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();

    let summary = service(log)
        .summary(&actor, date("2024-06-07"))
        .await
        .expect("summary should derive");

    assert_eq!(summary.streak.current, 0);
    assert_eq!(summary.streak.longest, 0);
    assert_eq!(summary.streak_tier.label, "Beginning");
    assert_eq!(summary.average_minutes_per_day, 0.0);
    assert_eq!(summary.average_tier.label, "Sprouting");
    assert_eq!(summary.calendar.len(), 42);
    assert!(summary.calendar.iter().all(|day| !day.completed));
}

#[tokio::test]
async fn test_ten_day_run_earns_committed_tier() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();
    log.add_daily_run(actor, "2024-06-07", 10);

    let summary = service(Arc::clone(&log))
        .summary(&actor, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 10);
    assert_eq!(summary.streak.longest, 10);
    assert_eq!(summary.streak.total_days, 10);
    assert_eq!(summary.streak_tier.label, "Committed");
    // 25 minutes every day of the trailing week.
    assert_eq!(summary.average_minutes_per_day, 25.0);
    assert_eq!(summary.average_tier.label, "Growing");
}

#[tokio::test]
async fn test_short_sessions_fill_the_calendar_but_not_the_streak() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();
    // Below the 20-minute completion threshold.
    log.add_session(actor, "2024-06-07", 10);
    log.add_session(actor, "2024-06-06", 12);

    let summary = service(log)
        .summary(&actor, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 0);
    let today_cell = summary.calendar.last().unwrap();
    assert!(!today_cell.completed);
    assert_eq!(today_cell.minutes, 10);
}

#[tokio::test]
async fn test_duplicate_sessions_on_one_day_count_once() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();
    log.add_session(actor, "2024-06-07", 25);
    log.add_session(actor, "2024-06-07", 30);
    log.add_session(actor, "2024-06-06", 25);

    let summary = service(log)
        .summary(&actor, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 2);
    assert_eq!(summary.streak.total_days, 2);
    // Calendar minutes do accumulate across the day's sessions.
    assert_eq!(summary.calendar.last().unwrap().minutes, 55);
}

#[tokio::test]
async fn test_yesterday_anchored_streak_is_not_broken_yet() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();
    log.add_daily_run(actor, "2024-06-06", 4);

    let summary = service(log)
        .summary(&actor, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 4);
}

#[tokio::test]
async fn test_actors_do_not_see_each_others_sessions() {
    let log = Arc::new(InMemoryActivityLog::new());
    let reader = ActorId::new();
    let other = ActorId::new();
    log.add_daily_run(other, "2024-06-07", 5);

    let summary = service(log)
        .summary(&reader, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 0);
    assert_eq!(summary.average_minutes_per_day, 0.0);
}

#[tokio::test]
async fn test_sessions_outside_the_window_are_not_fetched() {
    let log = Arc::new(InMemoryActivityLog::new());
    let actor = ActorId::new();
    // A long run that ended months ago.
    log.add_daily_run(actor, "2024-01-15", 30);

    let summary = service(log)
        .summary(&actor, date("2024-06-07"))
        .await
        .unwrap();

    assert_eq!(summary.streak.current, 0);
    assert_eq!(summary.streak.longest, 0);
    assert_eq!(summary.streak.total_days, 0);
}
