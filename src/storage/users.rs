//! User table operations.
//!
//! Password digesting lives in `auth`; this layer only stores and returns
//! opaque digest strings.

use rusqlite::{params, OptionalExtension};

use crate::error::HabitError;
use crate::habits::User;

use super::Database;

impl Database {
    /// Insert a new user and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::Auth`] if the username is taken.
    pub fn insert_user(
        &self,
        username: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<i64, HabitError> {
        if self.find_user(username)?.is_some() {
            return Err(HabitError::Auth(format!("username '{username}' already exists")));
        }

        self.connection()
            .execute(
                "INSERT INTO users (username, email, password_digest) VALUES (?1, ?2, ?3)",
                params![username, email, password_digest],
            )
            .map_err(|e| HabitError::Database(format!("Failed to insert user: {e}")))?;

        Ok(self.connection().last_insert_rowid())
    }

    /// Look up a user and their stored password digest by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_user(&self, username: &str) -> Result<Option<(User, String)>, HabitError> {
        self.connection()
            .query_row(
                "SELECT user_id, username, email, password_digest
                 FROM users WHERE username = ?1",
                params![username],
                |row| {
                    Ok((
                        User {
                            id: row.get(0)?,
                            username: row.get(1)?,
                            email: row.get(2)?,
                        },
                        row.get(3)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| HabitError::Database(format!("User query failed: {e}")))
    }
}
