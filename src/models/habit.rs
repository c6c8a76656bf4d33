use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::validate_not_blank;
use crate::store::Identified;

/// A recurring activity tracked with a daily completion streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier assigned at creation.
    pub id: Uuid,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Number of day windows in which the habit was marked done.
    pub streak: u32,
    /// Whether the habit has been marked done since the last daily reset.
    pub done_today: bool,
}

/// Request body for creating a habit.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct HabitInput {
    /// Must contain non-whitespace text and be at most 200 characters.
    #[serde(default)]
    #[validate(
        length(max = 200, message = "Title must be at most 200 characters"),
        custom = "validate_not_blank"
    )]
    pub title: String,
}

impl Habit {
    pub fn new(id: Uuid, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            streak: 0,
            done_today: false,
        }
    }

    /// Marks the habit done for the current day window.
    ///
    /// Returns `false` without touching the streak when it was already done,
    /// so repeated calls cannot inflate the streak.
    pub fn mark_done(&mut self) -> bool {
        if self.done_today {
            return false;
        }
        self.done_today = true;
        self.streak += 1;
        true
    }

    /// Opens a new day window. The streak is kept.
    pub fn reset_day(&mut self) {
        self.done_today = false;
    }
}

impl Identified for Habit {
    fn id(&self) -> Uuid {
        self.id
    }
}
