//! Core abstractions for habitual.
//!
//! This module provides shared date/time utilities used across features.

mod datetime;

pub use datetime::{day_delta, parse_timestamp};
