//! Command implementations for habitual.
//!
//! Each command loads what it needs from storage, calls into the analytics
//! engine where relevant, and returns a formatted string for `main` to
//! print.

mod auth;
mod habit;
mod report;

pub use auth::{login, signup};
pub use habit::{add, delete, done, list, miss};
pub use report::{report, streak};

use chrono::{Local, NaiveDateTime};
use clap::CommandFactory;

use crate::auth::Session;
use crate::cli::args::Cli;
use crate::core::parse_timestamp;
use crate::error::HabitError;
use crate::storage::Database;

/// Generate shell completions.
#[must_use]
pub fn completions(shell: clap_complete::Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "habitual", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Resolve a username into an explicit session value.
fn session_for(db: &Database, username: &str) -> Result<Session, HabitError> {
    let (user, _) = db
        .find_user(username.trim())?
        .ok_or_else(|| HabitError::Auth(format!("unknown user '{username}'")))?;

    Ok(Session {
        user_id: user.id,
        username: user.username,
    })
}

/// Resolve an optional `--at` argument, defaulting to now.
fn event_time(at: Option<&str>) -> Result<NaiveDateTime, HabitError> {
    at.map_or_else(|| Ok(Local::now().naive_local()), parse_timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_for_unknown_user() {
        let db = Database::open_in_memory().unwrap();
        let err = session_for(&db, "ghost").unwrap_err();
        assert!(matches!(err, HabitError::Auth(_)));
    }

    #[test]
    fn test_event_time_parses_explicit() {
        let t = event_time(Some("2024-06-10 21:30")).unwrap();
        assert_eq!(t.format("%Y-%m-%d %H:%M").to_string(), "2024-06-10 21:30");
    }

    #[test]
    fn test_event_time_rejects_garbage() {
        assert!(event_time(Some("whenever")).is_err());
    }

    #[test]
    fn test_completions_bash_mentions_binary() {
        let script = completions(clap_complete::Shell::Bash);
        assert!(script.contains("habitual"));
    }
}
