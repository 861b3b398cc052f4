//! `SQLite` persistence for habitual.
//!
//! Repository functions are grouped by table and implemented as methods on
//! [`Database`]: users in `users.rs`, habits in `habits.rs`, check-off logs
//! in `logs.rs`.

mod database;
mod habits;
mod logs;
mod migrations;
mod users;

pub use database::Database;

/// Storage format for timestamps (matches the log import format).
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
