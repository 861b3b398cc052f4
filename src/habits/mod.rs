//! Domain records for habitual.

mod types;

pub use types::{CheckoffLog, Frequency, Habit, HabitId, User};
