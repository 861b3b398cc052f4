//! Habit management commands: add, list, delete, done, miss.

use chrono::Local;
use colored::Colorize;
use serde_json::json;

use crate::analytics::filter_by_period;
use crate::cli::args::{AddArgs, ListArgs, LogArgs, OutputFormat};
use crate::core::parse_timestamp;
use crate::error::HabitError;
use crate::habits::Habit;
use crate::output::{format_habits, to_json};
use crate::storage::Database;

use super::{event_time, session_for};

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if the user is unknown, the deadline is malformed, or
/// the insert fails.
pub fn add(db: &Database, args: &AddArgs, format: OutputFormat) -> Result<String, HabitError> {
    let session = session_for(db, &args.user)?;

    let deadline = args.deadline.as_deref().map(parse_timestamp).transpose()?;
    let habit = db.insert_habit(
        session.user_id,
        &args.name,
        args.frequency,
        &args.description,
        deadline,
        Local::now().naive_local(),
    )?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Habit '{}' created with id {} for @{}.",
            "✓".green(),
            habit.name.bold(),
            habit.id,
            session.username
        )),
        OutputFormat::Json => to_json(&habit),
    }
}

/// Execute the list command.
///
/// With `--period`, only habits matching that frequency are shown; an
/// unknown period simply matches nothing.
///
/// # Errors
///
/// Returns an error if the user is unknown or the query fails.
pub fn list(db: &Database, args: &ListArgs, format: OutputFormat) -> Result<String, HabitError> {
    let session = session_for(db, &args.user)?;
    let habits = db.habits_for_user(session.user_id)?;

    let (habits, title): (Vec<Habit>, String) = match args.period.as_deref() {
        Some(period) => (
            filter_by_period(&habits, period).into_iter().cloned().collect(),
            format!("{period} habits for @{}", session.username),
        ),
        None => (habits, format!("Habits for @{}", session.username)),
    };

    format_habits(&habits, &title, format)
}

/// Execute the delete command.
///
/// # Errors
///
/// Returns an error if the habit does not exist.
pub fn delete(db: &Database, habit_id: i64, format: OutputFormat) -> Result<String, HabitError> {
    db.delete_habit(habit_id)?;

    match format {
        OutputFormat::Pretty => Ok(format!("{} Habit {habit_id} deleted.", "✓".green())),
        OutputFormat::Json => to_json(&json!({ "deleted": habit_id })),
    }
}

/// Execute the done command (record a completion).
///
/// # Errors
///
/// Returns an error if the habit does not exist or the timestamp is
/// malformed.
pub fn done(db: &Database, args: &LogArgs, format: OutputFormat) -> Result<String, HabitError> {
    let at = event_time(args.at.as_deref())?;
    db.record_checkoff(args.habit_id, at, args.note.as_deref())?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Habit {} checked off at {}.",
            "✓".green(),
            args.habit_id,
            at.format("%Y-%m-%d %H:%M")
        )),
        OutputFormat::Json => to_json(&json!({
            "habitId": args.habit_id,
            "completedAt": at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "missed": false,
        })),
    }
}

/// Execute the miss command (record a missed obligation).
///
/// # Errors
///
/// Returns an error if the habit does not exist or the timestamp is
/// malformed.
pub fn miss(db: &Database, args: &LogArgs, format: OutputFormat) -> Result<String, HabitError> {
    let at = event_time(args.at.as_deref())?;
    db.record_miss(args.habit_id, at, args.note.as_deref())?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Miss recorded for habit {} at {}.",
            "✗".red(),
            args.habit_id,
            at.format("%Y-%m-%d %H:%M")
        )),
        OutputFormat::Json => to_json(&json!({
            "habitId": args.habit_id,
            "completedAt": at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "missed": true,
        })),
    }
}
