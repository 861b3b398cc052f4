//! Habit analytics engine.
//!
//! Pure, stateless calculations over check-off logs and habit records:
//! - consecutive-day streaks (historical best and current run)
//! - per-habit miss counts, ranked by frequency
//! - filtering habits by their frequency period
//!
//! Every operation here is a plain function from input slices to a value.
//! Nothing is persisted and no I/O happens; callers load the records,
//! already scoped to a user or habit, and render the results.

mod misses;
mod period;
mod streaks;

pub use misses::{most_missed, MissCount};
pub use period::filter_by_period;
pub use streaks::{current_streak, longest_streak, StreakResult};
