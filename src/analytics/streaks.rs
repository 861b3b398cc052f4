//! Consecutive-day streak calculations.
//!
//! Two distinct measures over the same log shape:
//! - [`longest_streak`] scans a habit's whole history for its best run and
//!   picks the winning habit across the input.
//! - [`current_streak`] measures the unbroken run ending at the most recent
//!   entry of a single habit, stopping at the first gap.
//!
//! Both use calendar-day deltas between consecutive sorted timestamps, so a
//! check-off at 23:59 followed by one at 00:00 counts as adjacent days.
//! Miss records never extend a streak: logs with `missed == true` are
//! dropped before any sequencing.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::day_delta;
use crate::habits::{CheckoffLog, HabitId};

/// The habit with the longest historical streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResult {
    pub habit_id: HabitId,
    /// Length of the best run, in days.
    pub days: u32,
}

/// Find the habit with the longest run of consecutive completion days.
///
/// Logs may mix habits and arrive in any order. Returns `None` when there
/// are no completion logs at all. Ties go to the lowest habit id: grouping
/// iterates in ascending id order and a later habit only wins with a
/// strictly longer run.
#[must_use]
pub fn longest_streak(logs: &[CheckoffLog]) -> Option<StreakResult> {
    // BTreeMap iteration is ordered by habit id, which pins the tie-break.
    let mut by_habit: BTreeMap<HabitId, Vec<NaiveDateTime>> = BTreeMap::new();
    for log in logs.iter().filter(|l| !l.missed) {
        by_habit
            .entry(log.habit_id)
            .or_default()
            .push(log.completed_at);
    }

    let mut best: Option<StreakResult> = None;
    for (habit_id, mut timestamps) in by_habit {
        timestamps.sort_unstable();
        let days = longest_run(&timestamps);
        if best.map_or(true, |b| days > b.days) {
            best = Some(StreakResult { habit_id, days });
        }
    }

    best
}

/// Length of the best consecutive-day run in an ascending timestamp list.
///
/// A single entry is a run of 1. Any delta other than exactly one day,
/// including a second check-off on the same day, resets the run.
fn longest_run(sorted: &[NaiveDateTime]) -> u32 {
    let mut run = 1u32;
    let mut best = 1u32;

    for pair in sorted.windows(2) {
        if day_delta(pair[1], pair[0]) == 1 {
            run += 1;
            best = best.max(run);
        } else {
            run = 1;
        }
    }

    best
}

/// Length of the unbroken completion run ending at the most recent log.
///
/// Expects logs already scoped to one habit; callers filter by habit id
/// before calling. Walks from the most recent entry backwards and stops at
/// the first gap, so this measures the active streak rather than the
/// historical best. Empty input (or misses only) is a streak of 0.
#[must_use]
pub fn current_streak(logs: &[CheckoffLog]) -> u32 {
    let mut timestamps: Vec<NaiveDateTime> = logs
        .iter()
        .filter(|l| !l.missed)
        .map(|l| l.completed_at)
        .collect();

    if timestamps.is_empty() {
        return 0;
    }

    // Most recent first.
    timestamps.sort_unstable_by(|a, b| b.cmp(a));

    let mut streak = 1u32;
    for pair in timestamps.windows(2) {
        if day_delta(pair[0], pair[1]) == 1 {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn log(habit_id: HabitId, y: i32, m: u32, d: u32, h: u32, missed: bool) -> CheckoffLog {
        CheckoffLog {
            id: 0,
            habit_id,
            completed_at: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, 0, 0)
                .unwrap(),
            missed,
            note: None,
        }
    }

    fn done(habit_id: HabitId, d: u32) -> CheckoffLog {
        log(habit_id, 2024, 6, d, 9, false)
    }

    #[test]
    fn test_longest_streak_empty_input() {
        assert_eq!(longest_streak(&[]), None);
    }

    #[test]
    fn test_longest_streak_single_log_is_one() {
        let result = longest_streak(&[done(7, 10)]).unwrap();
        assert_eq!(result, StreakResult { habit_id: 7, days: 1 });
    }

    #[test]
    fn test_longest_streak_picks_best_habit() {
        // habit 1: three consecutive days; habit 2: two misses on one day
        let logs = vec![
            done(1, 10),
            done(1, 11),
            done(1, 12),
            log(2, 2024, 6, 12, 9, true),
            log(2, 2024, 6, 12, 20, true),
        ];
        let result = longest_streak(&logs).unwrap();
        assert_eq!(result, StreakResult { habit_id: 1, days: 3 });
    }

    #[test]
    fn test_longest_streak_is_historical_maximum() {
        // Run of 2 at the start, gap, then run of 3; the old run still counts
        let logs = vec![done(1, 1), done(1, 2), done(1, 10), done(1, 11), done(1, 12)];
        assert_eq!(longest_streak(&logs).unwrap().days, 3);
    }

    #[test]
    fn test_longest_streak_unordered_input() {
        let logs = vec![done(1, 12), done(1, 10), done(1, 11)];
        assert_eq!(longest_streak(&logs).unwrap().days, 3);
    }

    #[test]
    fn test_longest_streak_tie_goes_to_lowest_habit_id() {
        let logs = vec![done(5, 10), done(5, 11), done(3, 20), done(3, 21)];
        assert_eq!(longest_streak(&logs).unwrap().habit_id, 3);
    }

    #[test]
    fn test_misses_do_not_extend_longest_streak() {
        // Under a lenient reading that sequences miss records by date
        // adjacency, habit 2 would score (2, 3). Misses are excluded here,
        // so habit 1's two completion days win.
        let logs = vec![
            done(1, 10),
            done(1, 11),
            log(2, 2024, 6, 10, 9, false),
            log(2, 2024, 6, 11, 9, true),
            log(2, 2024, 6, 12, 9, true),
        ];
        let result = longest_streak(&logs).unwrap();
        assert_eq!(result, StreakResult { habit_id: 1, days: 2 });
    }

    #[test]
    fn test_longest_streak_all_misses_is_none() {
        let logs = vec![log(1, 2024, 6, 10, 9, true), log(1, 2024, 6, 11, 9, true)];
        assert_eq!(longest_streak(&logs), None);
    }

    #[test]
    fn test_same_day_duplicate_resets_run() {
        // Two check-offs on day 11: the 0-day delta breaks the sequence
        let logs = vec![done(1, 10), done(1, 11), done(1, 11), done(1, 12)];
        assert_eq!(longest_streak(&logs).unwrap().days, 2);
    }

    #[test]
    fn test_current_streak_empty_is_zero() {
        assert_eq!(current_streak(&[]), 0);
    }

    #[test]
    fn test_current_streak_counts_all_without_gaps() {
        let logs = vec![done(1, 10), done(1, 11), done(1, 12)];
        assert_eq!(current_streak(&logs), 3);
    }

    #[test]
    fn test_current_streak_breaks_on_first_gap() {
        // day 12 then a jump back to day 9: only the most recent entry counts
        let logs = vec![done(1, 12), done(1, 9)];
        assert_eq!(current_streak(&logs), 1);
    }

    #[test]
    fn test_current_streak_ignores_older_runs() {
        // Run of 2 ending at the most recent log; the longer run of 3 before
        // the gap is invisible to the current streak
        let logs = vec![done(1, 1), done(1, 2), done(1, 3), done(1, 11), done(1, 12)];
        assert_eq!(current_streak(&logs), 2);
    }

    #[test]
    fn test_current_streak_crosses_midnight() {
        let logs = vec![
            log(1, 2024, 6, 10, 23, false),
            log(1, 2024, 6, 11, 0, false),
        ];
        assert_eq!(current_streak(&logs), 2);
    }

    #[test]
    fn test_current_streak_excludes_misses() {
        let logs = vec![done(1, 11), log(1, 2024, 6, 12, 9, true)];
        // The miss on day 12 neither starts nor breaks the run
        assert_eq!(current_streak(&logs), 1);
    }

    #[test]
    fn test_current_streak_misses_only_is_zero() {
        let logs = vec![log(1, 2024, 6, 12, 9, true)];
        assert_eq!(current_streak(&logs), 0);
    }
}
