//! Authentication and session context.
//!
//! The analytics engine never sees identity; commands carry an explicit
//! [`Session`] value for the user they operate on. Passwords are stored as
//! SHA-256 hex digests.

use sha2::{Digest, Sha256};

use crate::error::HabitError;
use crate::storage::Database;

/// An authenticated user, passed to whichever layer needs identity.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
}

/// Register a new user and return a session for them.
///
/// # Errors
///
/// Returns [`HabitError::Validation`] for empty username or password and
/// [`HabitError::Auth`] if the username is already taken.
pub fn sign_up(
    db: &Database,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Session, HabitError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(HabitError::Validation("username must not be empty".to_string()));
    }
    if password.is_empty() {
        return Err(HabitError::Validation("password must not be empty".to_string()));
    }

    let user_id = db.insert_user(username, email, &digest(password))?;

    Ok(Session {
        user_id,
        username: username.to_string(),
    })
}

/// Authenticate an existing user.
///
/// # Errors
///
/// Returns [`HabitError::Auth`] for an unknown username or a wrong
/// password; the two cases share one message.
pub fn log_in(db: &Database, username: &str, password: &str) -> Result<Session, HabitError> {
    let found = db.find_user(username.trim())?;

    match found {
        Some((user, stored_digest)) if digest(password) == stored_digest => Ok(Session {
            user_id: user.id,
            username: user.username,
        }),
        _ => Err(HabitError::Auth("unknown username or wrong password".to_string())),
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
