//! Pretty (terminal) output formatting for habitual.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::habits::Habit;

use super::Report;

const FULL_BLOCK: char = '█';

/// Format a list of habits as a pretty table.
#[must_use]
pub fn format_habits_pretty(habits: &[Habit], title: &str) -> String {
    if habits.is_empty() {
        return format!("{title} (0 habits)\n  No habits");
    }

    let mut output = format!("{} ({} habits)\n", title, habits.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for habit in habits {
        let mut line = format!(
            "[{}] {}  {}",
            habit.id,
            habit.name.bold(),
            habit.frequency.to_string().cyan()
        );

        if !habit.description.is_empty() {
            line.push_str(&format!("  {}", habit.description.dimmed()));
        }

        if let Some(deadline) = &habit.deadline {
            line.push_str(&format!(
                "  {}",
                deadline.format("%Y-%m-%d %H:%M").to_string().yellow()
            ));
        }

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format an analytics report for the terminal.
#[must_use]
pub fn format_report_pretty(report: &Report, names: &BTreeMap<i64, String>) -> String {
    let mut output = Vec::new();

    output.push("Analytics Summary".bold().to_string());
    output.push("─".repeat(60));

    match &report.longest_streak {
        Some(best) => output.push(format!(
            "Longest streak: {} - {}",
            display_name(names, best.habit_id).green().bold(),
            format!("{} days", best.days).green()
        )),
        None => output.push("No streak data available.".dimmed().to_string()),
    }

    output.push(String::new());
    if report.most_missed.is_empty() {
        output.push("No missed habits.".green().to_string());
    } else {
        output.push("Most missed habits:".bold().to_string());
        let data: Vec<(String, usize)> = report
            .most_missed
            .iter()
            .map(|m| (display_name(names, m.habit_id), m.count as usize))
            .collect();
        output.push(render_bar_chart(&data, 20, 30));
    }

    if !report.current_streaks.is_empty() {
        output.push(String::new());
        output.push("Current streaks:".bold().to_string());
        for streak in &report.current_streaks {
            let days = if streak.days > 0 {
                format!("{} days", streak.days).green().to_string()
            } else {
                "0 days".dimmed().to_string()
            };
            output.push(format!("  {}  {}", streak.name, days));
        }
    }

    output.join("\n")
}

/// Render a horizontal bar chart from (label, value) pairs.
///
/// Labels longer than `max_label_width` are truncated with an ellipsis;
/// truncation counts characters, not bytes, so multibyte names are safe.
#[must_use]
pub fn render_bar_chart(data: &[(String, usize)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    // Room for at least the "..." suffix.
    let max_label_width = max_label_width.max(3);
    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.chars().count() > max_label_width {
            let kept: String = label.chars().take(max_label_width - 3).collect();
            format!("{kept}...")
        } else {
            format!("{label:max_label_width$}")
        };

        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bar_length = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{truncated_label} |{bar}{padding} {value}"));
    }

    lines.join("\n")
}

fn display_name(names: &BTreeMap<i64, String>, habit_id: i64) -> String {
    names
        .get(&habit_id)
        .cloned()
        .unwrap_or_else(|| format!("habit {habit_id}"))
}
