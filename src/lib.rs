//! habitual - a habit tracker for the command line
//!
//! This crate provides habit tracking backed by `SQLite`, with an analytics
//! engine that computes consecutive-day streaks and miss rankings from
//! check-off logs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod habits;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitError;
pub use storage::Database;
