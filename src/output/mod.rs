//! Output formatting for habitual.
//!
//! This module provides formatters for displaying habits and analytics in
//! pretty (colored, human-readable) and JSON forms.

mod json;
mod pretty;

use serde::Serialize;

use crate::analytics::{MissCount, StreakResult};
use crate::cli::args::OutputFormat;
use crate::error::HabitError;
use crate::habits::Habit;

pub use json::{format_habits_json, format_report_json, to_json};
pub use pretty::{format_habits_pretty, format_report_pretty, render_bar_chart};

/// Everything the `report` command computed, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Habit with the best historical run, if any completions exist.
    pub longest_streak: Option<StreakResult>,
    /// Miss ranking, most missed first, already truncated to the
    /// configured limit.
    pub most_missed: Vec<MissCount>,
    /// Current streak per habit, in habit id order.
    pub current_streaks: Vec<HabitStreak>,
}

/// A habit's current streak, decorated with its name for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStreak {
    pub habit_id: i64,
    pub name: String,
    pub days: u32,
}

/// Format habits based on output format.
///
/// # Errors
///
/// Returns `HabitError::Serialize` if JSON serialization fails.
pub fn format_habits(
    habits: &[Habit],
    title: &str,
    format: OutputFormat,
) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits, title)),
        OutputFormat::Json => format_habits_json(habits, title),
    }
}

/// Format an analytics report based on output format.
///
/// `names` resolves habit ids mentioned in the report to display names.
///
/// # Errors
///
/// Returns `HabitError::Serialize` if JSON serialization fails.
pub fn format_report(
    report: &Report,
    names: &std::collections::BTreeMap<i64, String>,
    format: OutputFormat,
) -> Result<String, HabitError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report, names)),
        OutputFormat::Json => format_report_json(report),
    }
}
