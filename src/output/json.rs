//! JSON output formatting for habitual.

use serde::Serialize;
use serde_json::json;

use crate::error::HabitError;
use crate::habits::Habit;

use super::Report;

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `HabitError::Serialize` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format habits as JSON.
///
/// # Errors
///
/// Returns `HabitError::Serialize` if serialization fails.
pub fn format_habits_json(habits: &[Habit], list_name: &str) -> Result<String, HabitError> {
    let output = json!({
        "list": list_name,
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format an analytics report as JSON.
///
/// # Errors
///
/// Returns `HabitError::Serialize` if serialization fails.
pub fn format_report_json(report: &Report) -> Result<String, HabitError> {
    to_json(report)
}
