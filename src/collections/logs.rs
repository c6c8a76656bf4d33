use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;

use crate::error::AppError;
use crate::models::daily_log::{FUTURE_DATE_MESSAGE, HOURS_MESSAGE, MOOD_MESSAGE};
use crate::models::{DailyLog, DailyLogInput};
use crate::store::{IdGenerator, InMemoryRepository, RandomIds, Repository};

/// Daily work logs. Entries are append-only; several per day are allowed.
#[derive(Clone)]
pub struct DailyLogs {
    repo: Arc<dyn Repository<DailyLog>>,
    ids: Arc<dyn IdGenerator>,
}

impl DailyLogs {
    pub fn new(repo: Arc<dyn Repository<DailyLog>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new("daily logs")),
            Arc::new(RandomIds),
        )
    }

    pub fn list(&self) -> Result<Vec<DailyLog>, AppError> {
        self.repo.list()
    }

    /// Records an entry dated `input.date`, or `today` when none is given.
    pub fn add(&self, input: &DailyLogInput, today: NaiveDate) -> Result<DailyLog, AppError> {
        if !input.hours.is_finite() || input.hours < 0.0 {
            return Err(AppError::ValidationError(HOURS_MESSAGE.into()));
        }
        if !(1..=5).contains(&input.mood) {
            return Err(AppError::ValidationError(MOOD_MESSAGE.into()));
        }
        let date = input.date.unwrap_or(today);
        if date > today {
            return Err(AppError::ValidationError(FUTURE_DATE_MESSAGE.into()));
        }

        let log = self.repo.add(DailyLog::new(
            self.ids.next_id(),
            input.hours,
            &input.notes,
            input.mood,
            date,
        ))?;
        info!("daily log {} recorded for {}: {}h", log.id, log.date, log.hours);
        Ok(log)
    }
}

/// Consecutive days with at least one entry, counting back from `today`.
/// Zero when nothing was logged today.
pub fn log_streak(logs: &[DailyLog], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = logs.iter().map(|log| log.date).collect();
    let mut streak = 0;
    let mut day = Some(today);
    while let Some(current) = day.filter(|d| days.contains(d)) {
        streak += 1;
        day = current.pred_opt();
    }
    streak
}
