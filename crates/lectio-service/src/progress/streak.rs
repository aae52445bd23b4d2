//! Consecutive-day streak calculator.

use std::collections::BTreeSet;

use lectio_core::types::LocalDate;
use lectio_entity::progress::StreakState;

/// Compute the current consecutive-day streak.
///
/// `completed` is the set of local calendar days on which the actor finished
/// at least one qualifying session; duplicates collapsed into the set cannot
/// double-count. `today` is the caller's local date — never server time, so
/// the result cannot drift around midnight.
///
/// The walk anchors at `today` if it is in the set, otherwise at yesterday:
/// a day without a session does not break a streak the actor can still
/// extend by reading today, but two consecutive missed days do. From the
/// anchor it steps backward one calendar day at a time until the first
/// absent date.
///
/// `cap` bounds the walk so corrupted data cannot loop for thousands of
/// iterations; streaks are never reported above it. Callers tracking longer
/// history must raise the cap explicitly.
pub fn compute_streak(completed: &BTreeSet<LocalDate>, today: LocalDate, cap: u32) -> u32 {
    if cap == 0 {
        return 0;
    }

    let anchor = if completed.contains(&today) {
        today
    } else {
        match today.pred() {
            Some(yesterday) if completed.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 1;
    let mut cursor = anchor;
    while streak < cap {
        let Some(prev) = cursor.pred() else { break };
        if !completed.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }
    streak
}

/// Length of the longest consecutive-day run anywhere in the set.
pub fn longest_run(completed: &BTreeSet<LocalDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<LocalDate> = None;
    for &date in completed {
        run = match prev {
            Some(p) if p.succ() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }
    longest
}

/// Derive the full [`StreakState`] for one activity window.
pub fn derive_streak_state(
    completed: &BTreeSet<LocalDate>,
    today: LocalDate,
    cap: u32,
) -> StreakState {
    StreakState {
        current: compute_streak(completed, today, cap),
        longest: longest_run(completed),
        total_days: completed.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> LocalDate {
        s.parse().unwrap()
    }

    fn set(dates: &[&str]) -> BTreeSet<LocalDate> {
        dates.iter().map(|s| date(s)).collect()
    }

    #[test]
    fn test_empty_set_gives_zero() {
        assert_eq!(compute_streak(&BTreeSet::new(), date("2024-06-03"), 365), 0);
    }

    #[test]
    fn test_only_today_gives_one() {
        let completed = set(&["2024-06-03"]);
        assert_eq!(compute_streak(&completed, date("2024-06-03"), 365), 1);
    }

    #[test]
    fn test_three_day_run_ending_today() {
        let completed = set(&["2024-06-01", "2024-06-02", "2024-06-03"]);
        assert_eq!(compute_streak(&completed, date("2024-06-03"), 365), 3);
    }

    #[test]
    fn test_two_day_gap_breaks_streak() {
        let completed = set(&["2024-06-01", "2024-06-02"]);
        assert_eq!(compute_streak(&completed, date("2024-06-04"), 365), 0);
    }

    #[test]
    fn test_yesterday_anchored_streak_survives_missing_today() {
        let completed = set(&["2024-06-02", "2024-06-03"]);
        assert_eq!(compute_streak(&completed, date("2024-06-04"), 365), 2);
    }

    #[test]
    fn test_gap_stops_the_walk_despite_older_dates() {
        let completed = set(&["2024-05-28", "2024-05-29", "2024-06-01", "2024-06-02"]);
        assert_eq!(compute_streak(&completed, date("2024-06-02"), 365), 2);
    }

    #[test]
    fn test_walk_crosses_month_boundary() {
        let completed = set(&["2024-05-30", "2024-05-31", "2024-06-01"]);
        assert_eq!(compute_streak(&completed, date("2024-06-01"), 365), 3);
    }

    #[test]
    fn test_walk_crosses_leap_day() {
        let completed = set(&["2024-02-28", "2024-02-29", "2024-03-01"]);
        assert_eq!(compute_streak(&completed, date("2024-03-01"), 365), 3);
    }

    #[test]
    fn test_cap_bounds_the_walk() {
        let mut completed = BTreeSet::new();
        let today = date("2024-06-03");
        let mut cursor = Some(today);
        for _ in 0..500 {
            let c = cursor.unwrap();
            completed.insert(c);
            cursor = c.pred();
        }
        assert_eq!(compute_streak(&completed, today, 365), 365);
        assert_eq!(compute_streak(&completed, today, 400), 400);
        assert_eq!(compute_streak(&completed, today, 0), 0);
    }

    #[test]
    fn test_idempotent() {
        let completed = set(&["2024-06-02", "2024-06-03"]);
        let today = date("2024-06-03");
        assert_eq!(
            compute_streak(&completed, today, 365),
            compute_streak(&completed, today, 365)
        );
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&BTreeSet::new()), 0);
        assert_eq!(longest_run(&set(&["2024-06-03"])), 1);
        assert_eq!(
            longest_run(&set(&[
                "2024-05-01",
                "2024-05-02",
                "2024-05-03",
                "2024-05-10",
                "2024-05-11",
            ])),
            3
        );
    }

    #[test]
    fn test_derive_streak_state() {
        let completed = set(&["2024-05-20", "2024-05-21", "2024-05-22", "2024-06-03"]);
        let state = derive_streak_state(&completed, date("2024-06-03"), 365);
        assert_eq!(state.current, 1);
        assert_eq!(state.longest, 3);
        assert_eq!(state.total_days, 4);
    }
}
