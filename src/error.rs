//! Error types for habitual.

use thiserror::Error;

/// Errors surfaced by habitual operations.
#[derive(Debug, Error)]
pub enum HabitError {
    /// Configuration loading or path resolution failed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database open, migration, or query failed.
    #[error("database error: {0}")]
    Database(String),

    /// A stored timestamp could not be parsed.
    ///
    /// Carries the offending text so the caller can identify the record;
    /// malformed timestamps are never coerced to a default instant.
    #[error("invalid timestamp {value:?}: {reason}")]
    Timestamp {
        /// The raw timestamp text that failed to parse.
        value: String,
        /// Why the parse failed.
        reason: String,
    },

    /// Sign-up or log-in failed.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Referenced habit does not exist.
    #[error("habit {0} not found")]
    HabitNotFound(i64),

    /// User-supplied input failed validation.
    #[error("invalid input: {0}")]
    Validation(String),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl HabitError {
    /// Build a `Timestamp` error from a chrono parse failure.
    #[must_use]
    pub fn timestamp(value: &str, err: &chrono::ParseError) -> Self {
        Self::Timestamp {
            value: value.to_string(),
            reason: err.to_string(),
        }
    }
}
