use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::store::Identified;

pub const HOURS_MESSAGE: &str = "Hours must be zero or more";
pub const MOOD_MESSAGE: &str = "Mood must be between 1 and 5";
pub const FUTURE_DATE_MESSAGE: &str = "Date cannot be in the future";

/// One day's record of time spent working or studying, with a mood score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: Uuid,
    /// Hours worked or studied. Never negative.
    pub hours: f64,
    /// Free text, stored trimmed. May be empty.
    pub notes: String,
    /// 1 (worst) to 5 (best).
    pub mood: u8,
    /// The calendar day the entry counts for.
    pub date: NaiveDate,
}

/// Request body for recording a log entry. `date` defaults to today (UTC).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyLogInput {
    #[serde(default)]
    #[validate(range(min = 0.0, message = "Hours must be zero or more"))]
    pub hours: f64,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "Mood must be between 1 and 5"))]
    pub mood: u8,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl DailyLog {
    pub fn new(id: Uuid, hours: f64, notes: &str, mood: u8, date: NaiveDate) -> Self {
        Self {
            id,
            hours,
            notes: notes.trim().to_string(),
            mood,
            date,
        }
    }
}

impl Identified for DailyLog {
    fn id(&self) -> Uuid {
        self.id
    }
}
