//! Filtering habits by frequency period.

use crate::habits::Habit;

/// Select the habits whose frequency matches `period`, preserving order.
///
/// The comparison is a case-insensitive match against the canonical
/// frequency name ("daily", "weekly"). An unknown period is not an error;
/// it simply matches nothing. Validating allowed frequency values is the
/// input boundary's job, not this filter's.
#[must_use]
pub fn filter_by_period<'a>(habits: &'a [Habit], period: &str) -> Vec<&'a Habit> {
    habits
        .iter()
        .filter(|h| h.frequency.as_str().eq_ignore_ascii_case(period))
        .collect()
}
