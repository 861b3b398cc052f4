//! Habit table operations.

use chrono::NaiveDateTime;
use rusqlite::params;

use crate::error::HabitError;
use crate::habits::{Frequency, Habit, HabitId};

use super::{Database, TIMESTAMP_FORMAT};

/// Raw habit row before timestamps and frequency are validated.
struct HabitRow {
    id: HabitId,
    user_id: i64,
    name: String,
    frequency: String,
    description: String,
    deadline: Option<String>,
    created_at: String,
}

impl Database {
    /// Insert a new habit and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::Validation`] for an empty name and
    /// [`HabitError::Database`] if the insert fails.
    pub fn insert_habit(
        &self,
        user_id: i64,
        name: &str,
        frequency: Frequency,
        description: &str,
        deadline: Option<NaiveDateTime>,
        created_at: NaiveDateTime,
    ) -> Result<Habit, HabitError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::Validation("habit name must not be empty".to_string()));
        }

        self.connection()
            .execute(
                "INSERT INTO habits (user_id, name, frequency, description, deadline, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    user_id,
                    name,
                    frequency.as_str(),
                    description,
                    deadline.map(|d| d.format(TIMESTAMP_FORMAT).to_string()),
                    created_at.format(TIMESTAMP_FORMAT).to_string(),
                ],
            )
            .map_err(|e| HabitError::Database(format!("Failed to insert habit: {e}")))?;

        let id = self.connection().last_insert_rowid();

        Ok(Habit {
            id,
            user_id,
            name: name.to_string(),
            frequency,
            description: description.to_string(),
            deadline,
            created_at,
        })
    }

    /// Delete a habit and its logs (cascades).
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::HabitNotFound`] if no row matched.
    pub fn delete_habit(&self, habit_id: HabitId) -> Result<(), HabitError> {
        let affected = self
            .connection()
            .execute("DELETE FROM habits WHERE habit_id = ?1", params![habit_id])
            .map_err(|e| HabitError::Database(format!("Failed to delete habit: {e}")))?;

        if affected == 0 {
            return Err(HabitError::HabitNotFound(habit_id));
        }

        Ok(())
    }

    /// Load a single habit by id.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::HabitNotFound`] if the habit does not exist.
    pub fn get_habit(&self, habit_id: HabitId) -> Result<Habit, HabitError> {
        let mut habits = self.query_habits("WHERE habit_id = ?1", params![habit_id])?;
        habits.pop().ok_or(HabitError::HabitNotFound(habit_id))
    }

    /// Load all habits owned by a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn habits_for_user(&self, user_id: i64) -> Result<Vec<Habit>, HabitError> {
        self.query_habits("WHERE user_id = ?1 ORDER BY habit_id", params![user_id])
    }

    fn query_habits(
        &self,
        clause: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Habit>, HabitError> {
        let sql = format!(
            "SELECT habit_id, user_id, name, frequency, description, deadline, created_at
             FROM habits {clause}"
        );

        let mut stmt = self
            .connection()
            .prepare(&sql)
            .map_err(|e| HabitError::Database(format!("Failed to prepare habit query: {e}")))?;

        let rows = stmt
            .query_map(params, |row| {
                Ok(HabitRow {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    name: row.get(2)?,
                    frequency: row.get(3)?,
                    description: row.get(4)?,
                    deadline: row.get(5)?,
                    created_at: row.get(6)?,
                })
            })
            .map_err(|e| HabitError::Database(format!("Habit query failed: {e}")))?;

        let mut habits = Vec::new();
        for row in rows {
            let row = row.map_err(|e| HabitError::Database(format!("Habit row read failed: {e}")))?;
            habits.push(hydrate(row)?);
        }

        Ok(habits)
    }
}

/// Validate a raw row into a typed record.
fn hydrate(row: HabitRow) -> Result<Habit, HabitError> {
    let frequency: Frequency = row.frequency.parse().map_err(|_| {
        HabitError::Database(format!(
            "habits row {}: invalid frequency {:?}",
            row.id, row.frequency
        ))
    })?;

    let created_at = super::logs::parse_row_timestamp("habits", row.id, &row.created_at)?;
    let deadline = row
        .deadline
        .as_deref()
        .map(|s| super::logs::parse_row_timestamp("habits", row.id, s))
        .transpose()?;

    Ok(Habit {
        id: row.id,
        user_id: row.user_id,
        name: row.name,
        frequency,
        description: row.description,
        deadline,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn db_with_user() -> (Database, i64) {
        let db = Database::open_in_memory().unwrap();
        let user_id = db.insert_user("dan", "dan@example.com", "digest").unwrap();
        (db, user_id)
    }

    #[test]
    fn test_insert_and_get_habit() {
        let (db, user_id) = db_with_user();
        let habit = db
            .insert_habit(user_id, "Stretch", Frequency::Daily, "morning stretch", None, now())
            .unwrap();

        let loaded = db.get_habit(habit.id).unwrap();
        assert_eq!(loaded.name, "Stretch");
        assert_eq!(loaded.frequency, Frequency::Daily);
        assert_eq!(loaded.created_at, now());
        assert!(loaded.deadline.is_none());
    }

    #[test]
    fn test_insert_habit_rejects_empty_name() {
        let (db, user_id) = db_with_user();
        let err = db
            .insert_habit(user_id, "   ", Frequency::Daily, "", None, now())
            .unwrap_err();
        assert!(matches!(err, HabitError::Validation(_)));
    }

    #[test]
    fn test_habits_for_user_ordered() {
        let (db, user_id) = db_with_user();
        db.insert_habit(user_id, "A", Frequency::Daily, "", None, now()).unwrap();
        db.insert_habit(user_id, "B", Frequency::Weekly, "", None, now()).unwrap();

        let habits = db.habits_for_user(user_id).unwrap();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits[0].name, "A");
        assert_eq!(habits[1].name, "B");
    }

    #[test]
    fn test_delete_habit_missing_is_not_found() {
        let (db, _) = db_with_user();
        let err = db.delete_habit(42).unwrap_err();
        assert!(matches!(err, HabitError::HabitNotFound(42)));
    }

    #[test]
    fn test_delete_habit_cascades_logs() {
        let (db, user_id) = db_with_user();
        let habit = db
            .insert_habit(user_id, "Run", Frequency::Daily, "", None, now())
            .unwrap();
        db.record_checkoff(habit.id, now(), None).unwrap();

        db.delete_habit(habit.id).unwrap();
        assert!(db.logs_for_habit(habit.id).unwrap().is_empty());
    }

    #[test]
    fn test_deadline_round_trips() {
        let (db, user_id) = db_with_user();
        let deadline = NaiveDate::from_ymd_opt(2024, 6, 30)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap();
        let habit = db
            .insert_habit(user_id, "Read", Frequency::Weekly, "", Some(deadline), now())
            .unwrap();

        let loaded = db.get_habit(habit.id).unwrap();
        assert_eq!(loaded.deadline, Some(deadline));
    }
}
