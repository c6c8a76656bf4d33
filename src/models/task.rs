use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::validate_not_blank;
use crate::store::Identified;

/// A one-time to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier assigned at creation.
    pub id: Uuid,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Set once; there is no way back to `false`.
    pub completed: bool,
}

/// Request body for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// Must contain non-whitespace text and be at most 200 characters.
    #[serde(default)]
    #[validate(
        length(max = 200, message = "Title must be at most 200 characters"),
        custom = "validate_not_blank"
    )]
    pub title: String,
}

impl Task {
    pub fn new(id: Uuid, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            completed: false,
        }
    }

    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl Identified for Task {
    fn id(&self) -> Uuid {
        self.id
    }
}
