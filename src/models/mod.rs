pub mod daily_log;
pub mod habit;
pub mod task;
pub mod user;

pub use daily_log::{DailyLog, DailyLogInput};
pub use habit::{Habit, HabitInput};
pub use task::{Task, TaskInput};
pub use user::{PublicUser, User};

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
