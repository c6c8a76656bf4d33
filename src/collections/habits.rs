use std::sync::Arc;

use log::{debug, info};
use uuid::Uuid;

use crate::collections::require_title;
use crate::error::AppError;
use crate::models::Habit;
use crate::store::{IdGenerator, InMemoryRepository, RandomIds, Repository};

/// The habit collection and its daily-streak rules.
#[derive(Clone)]
pub struct Habits {
    repo: Arc<dyn Repository<Habit>>,
    ids: Arc<dyn IdGenerator>,
}

impl Habits {
    pub fn new(repo: Arc<dyn Repository<Habit>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }

    /// An empty in-memory collection with random ids.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new("habits")),
            Arc::new(RandomIds),
        )
    }

    pub fn list(&self) -> Result<Vec<Habit>, AppError> {
        self.repo.list()
    }

    pub fn add(&self, title: &str) -> Result<Habit, AppError> {
        let title = require_title(title)?;
        let habit = self.repo.add(Habit::new(self.ids.next_id(), title))?;
        info!("habit {} created: {:?}", habit.id, habit.title);
        Ok(habit)
    }

    /// Marks the habit done for today. Calling it again before the next
    /// reset returns the habit unchanged.
    pub fn mark_done(&self, id: Uuid) -> Result<Habit, AppError> {
        let mut changed = false;
        let habit = self
            .repo
            .update_by_id(id, &mut |habit: &mut Habit| changed = habit.mark_done())?
            .ok_or_else(|| AppError::NotFound("Habit not found".into()))?;

        if changed {
            info!("habit {} done, streak {}", habit.id, habit.streak);
        } else {
            debug!("habit {} already done today", habit.id);
        }
        Ok(habit)
    }

    /// Clears `doneToday` on every habit. Returns how many were reset.
    pub fn reset_daily(&self) -> Result<usize, AppError> {
        let count = self.repo.update_all(&mut |habit: &mut Habit| habit.reset_day())?;
        info!("daily reset cleared {} habit(s)", count);
        Ok(count)
    }
}
