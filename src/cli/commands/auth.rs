//! Signup and login commands.

use colored::Colorize;
use serde_json::json;

use crate::auth;
use crate::cli::args::{LoginArgs, OutputFormat, SignupArgs};
use crate::error::HabitError;
use crate::output::to_json;
use crate::storage::Database;

/// Execute the signup command.
///
/// # Errors
///
/// Returns an error if validation fails or the username is taken.
pub fn signup(db: &Database, args: &SignupArgs, format: OutputFormat) -> Result<String, HabitError> {
    let session = auth::sign_up(db, &args.username, &args.email, &args.password)?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} User '{}' registered with id {}.",
            "✓".green(),
            session.username.bold(),
            session.user_id
        )),
        OutputFormat::Json => to_json(&json!({
            "userId": session.user_id,
            "username": session.username,
        })),
    }
}

/// Execute the login command.
///
/// # Errors
///
/// Returns an error if the credentials do not match.
pub fn login(db: &Database, args: &LoginArgs, format: OutputFormat) -> Result<String, HabitError> {
    let session = auth::log_in(db, &args.username, &args.password)?;

    match format {
        OutputFormat::Pretty => Ok(format!(
            "{} Logged in as '{}' (id {}).",
            "✓".green(),
            session.username.bold(),
            session.user_id
        )),
        OutputFormat::Json => to_json(&json!({
            "userId": session.user_id,
            "username": session.username,
        })),
    }
}
