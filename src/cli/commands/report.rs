//! Analytics commands: report and streak.

use std::collections::BTreeMap;

use serde_json::json;

use crate::analytics::{current_streak, longest_streak, most_missed};
use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::HabitError;
use crate::habits::{CheckoffLog, HabitId};
use crate::output::{format_report, to_json, HabitStreak, Report};
use crate::storage::Database;

use super::session_for;

/// Execute the streak command: current streak for one habit.
///
/// # Errors
///
/// Returns an error if the habit does not exist or its logs cannot be
/// loaded.
pub fn streak(db: &Database, habit_id: HabitId, format: OutputFormat) -> Result<String, HabitError> {
    let habit = db.get_habit(habit_id)?;
    let logs = db.logs_for_habit(habit_id)?;
    let days = current_streak(&logs);

    match format {
        OutputFormat::Pretty => Ok(format!(
            "Current streak for '{}': {} day{}",
            habit.name,
            days,
            if days == 1 { "" } else { "s" }
        )),
        OutputFormat::Json => to_json(&json!({
            "habitId": habit.id,
            "name": habit.name,
            "days": days,
        })),
    }
}

/// Execute the report command: full analytics summary for a user.
///
/// # Errors
///
/// Returns an error if the user is unknown or any record fails to load.
pub fn report(
    db: &Database,
    config: &Config,
    user: &str,
    format: OutputFormat,
) -> Result<String, HabitError> {
    let session = session_for(db, user)?;
    let habits = db.habits_for_user(session.user_id)?;
    let logs = db.logs_for_user(session.user_id)?;

    let names: BTreeMap<i64, String> = habits.iter().map(|h| (h.id, h.name.clone())).collect();

    let mut missed = most_missed(&logs);
    missed.truncate(config.report.top_missed);

    // One pass to split the user's logs back out per habit for the
    // current-streak column.
    let mut by_habit: BTreeMap<HabitId, Vec<CheckoffLog>> = BTreeMap::new();
    for log in logs.iter().cloned() {
        by_habit.entry(log.habit_id).or_default().push(log);
    }

    let current_streaks = habits
        .iter()
        .map(|habit| HabitStreak {
            habit_id: habit.id,
            name: habit.name.clone(),
            days: by_habit.get(&habit.id).map_or(0, |logs| current_streak(logs)),
        })
        .collect();

    let summary = Report {
        longest_streak: longest_streak(&logs),
        most_missed: missed,
        current_streaks,
    };

    format_report(&summary, &names, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::Frequency;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        let session = crate::auth::sign_up(&db, "dan", "dan@example.com", "hunter2").unwrap();

        let run = db
            .insert_habit(session.user_id, "Run", Frequency::Daily, "", None, at(1))
            .unwrap();
        let read = db
            .insert_habit(session.user_id, "Read", Frequency::Daily, "", None, at(1))
            .unwrap();

        // Run: three consecutive days; Read: two misses
        db.record_checkoff(run.id, at(10), None).unwrap();
        db.record_checkoff(run.id, at(11), None).unwrap();
        db.record_checkoff(run.id, at(12), None).unwrap();
        db.record_miss(read.id, at(11), None).unwrap();
        db.record_miss(read.id, at(12), None).unwrap();

        db
    }

    #[test]
    fn test_streak_command() {
        let db = seeded_db();
        let out = streak(&db, 1, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["days"], 3);
        assert_eq!(value["name"], "Run");
    }

    #[test]
    fn test_streak_unknown_habit() {
        let db = seeded_db();
        assert!(streak(&db, 99, OutputFormat::Pretty).is_err());
    }

    #[test]
    fn test_report_json() {
        let db = seeded_db();
        let out = report(&db, &Config::default(), "dan", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["longestStreak"]["habitId"], 1);
        assert_eq!(value["longestStreak"]["days"], 3);
        assert_eq!(value["mostMissed"][0]["habitId"], 2);
        assert_eq!(value["mostMissed"][0]["count"], 2);

        let streaks = value["currentStreaks"].as_array().unwrap();
        assert_eq!(streaks.len(), 2);
        assert_eq!(streaks[0]["days"], 3);
        assert_eq!(streaks[1]["days"], 0);
    }

    #[test]
    fn test_report_respects_top_missed_limit() {
        let db = seeded_db();
        let mut config = Config::default();
        config.report.top_missed = 0;

        let out = report(&db, &config, "dan", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["mostMissed"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_report_pretty_names_habits() {
        let db = seeded_db();
        let out = report(&db, &Config::default(), "dan", OutputFormat::Pretty).unwrap();
        assert!(out.contains("Run"));
        assert!(out.contains("Read"));
    }

    #[test]
    fn test_report_empty_user() {
        let db = Database::open_in_memory().unwrap();
        crate::auth::sign_up(&db, "eve", "eve@example.com", "pw").unwrap();

        let out = report(&db, &Config::default(), "eve", OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value["longestStreak"].is_null());
        assert!(value["mostMissed"].as_array().unwrap().is_empty());
    }
}
