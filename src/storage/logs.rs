//! Check-off log table operations.

use chrono::NaiveDateTime;
use rusqlite::params;

use crate::core::parse_timestamp;
use crate::error::HabitError;
use crate::habits::{CheckoffLog, HabitId};

use super::{Database, TIMESTAMP_FORMAT};

/// Raw log row before the timestamp is validated.
struct LogRow {
    id: i64,
    habit_id: HabitId,
    completed_at: String,
    missed: bool,
    note: Option<String>,
}

impl Database {
    /// Record a completion event for a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_checkoff(
        &self,
        habit_id: HabitId,
        at: NaiveDateTime,
        note: Option<&str>,
    ) -> Result<(), HabitError> {
        self.insert_log(habit_id, at, false, note)
    }

    /// Record a miss event for a habit.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_miss(
        &self,
        habit_id: HabitId,
        at: NaiveDateTime,
        note: Option<&str>,
    ) -> Result<(), HabitError> {
        self.insert_log(habit_id, at, true, note)
    }

    fn insert_log(
        &self,
        habit_id: HabitId,
        at: NaiveDateTime,
        missed: bool,
        note: Option<&str>,
    ) -> Result<(), HabitError> {
        // Verify the habit exists so a stray id fails loudly instead of
        // tripping the foreign key constraint.
        self.get_habit(habit_id)?;

        self.connection()
            .execute(
                "INSERT INTO habit_logs (habit_id, completed_at, missed, note)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    habit_id,
                    at.format(TIMESTAMP_FORMAT).to_string(),
                    missed,
                    note,
                ],
            )
            .map_err(|e| HabitError::Database(format!("Failed to insert log: {e}")))?;

        Ok(())
    }

    /// Load all logs for one habit, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored timestamp is
    /// malformed; the error names the offending row.
    pub fn logs_for_habit(&self, habit_id: HabitId) -> Result<Vec<CheckoffLog>, HabitError> {
        self.query_logs(
            "SELECT log_id, habit_id, completed_at, missed, note
             FROM habit_logs WHERE habit_id = ?1 ORDER BY completed_at",
            params![habit_id],
        )
    }

    /// Load all logs across every habit owned by a user.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored timestamp is
    /// malformed; the error names the offending row.
    pub fn logs_for_user(&self, user_id: i64) -> Result<Vec<CheckoffLog>, HabitError> {
        self.query_logs(
            "SELECT l.log_id, l.habit_id, l.completed_at, l.missed, l.note
             FROM habit_logs l
             JOIN habits h ON h.habit_id = l.habit_id
             WHERE h.user_id = ?1
             ORDER BY l.completed_at",
            params![user_id],
        )
    }

    fn query_logs(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<CheckoffLog>, HabitError> {
        let mut stmt = self
            .connection()
            .prepare(sql)
            .map_err(|e| HabitError::Database(format!("Failed to prepare log query: {e}")))?;

        let rows = stmt
            .query_map(params, |row| {
                Ok(LogRow {
                    id: row.get(0)?,
                    habit_id: row.get(1)?,
                    completed_at: row.get(2)?,
                    missed: row.get(3)?,
                    note: row.get(4)?,
                })
            })
            .map_err(|e| HabitError::Database(format!("Log query failed: {e}")))?;

        let mut logs = Vec::new();
        for row in rows {
            let row = row.map_err(|e| HabitError::Database(format!("Log row read failed: {e}")))?;
            logs.push(hydrate(row)?);
        }

        Ok(logs)
    }
}

fn hydrate(row: LogRow) -> Result<CheckoffLog, HabitError> {
    let completed_at = parse_row_timestamp("habit_logs", row.id, &row.completed_at)?;

    Ok(CheckoffLog {
        id: row.id,
        habit_id: row.habit_id,
        completed_at,
        missed: row.missed,
        note: row.note,
    })
}

/// Parse a stored timestamp, tagging failures with the source row.
pub(super) fn parse_row_timestamp(
    table: &str,
    row_id: i64,
    raw: &str,
) -> Result<NaiveDateTime, HabitError> {
    parse_timestamp(raw).map_err(|e| match e {
        HabitError::Timestamp { value, reason } => HabitError::Timestamp {
            value,
            reason: format!("{table} row {row_id}: {reason}"),
        },
        other => other,
    })
}
