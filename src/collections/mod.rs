//! Mutation logic for the tracked collections.
//!
//! [`Habits`], [`Tasks`] and [`DailyLogs`] own their state transitions; storage
//! and id assignment are injected so the rules here hold for any backing store.

pub mod habits;
pub mod logs;
pub mod tasks;

pub use habits::Habits;
pub use logs::{log_streak, DailyLogs};
pub use tasks::Tasks;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{DailyLog, Habit, Task};

/// Each completed task is worth two logged hours in the productivity score.
const POINTS_PER_COMPLETED_TASK: f64 = 2.0;

/// Trims `title` and rejects it when nothing is left.
pub(crate) fn require_title(title: &str) -> Result<&str, AppError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(AppError::ValidationError("Title is required".into()));
    }
    Ok(title)
}

/// Everything the dashboard shows: done/pending counts plus the work-log totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub habits_total: usize,
    pub habits_done: usize,
    pub habits_pending: usize,
    pub tasks_total: usize,
    pub tasks_done: usize,
    pub tasks_pending: usize,
    pub logs_total: usize,
    pub hours_total: f64,
    /// Mean mood over all entries, 0 when there are none.
    pub average_mood: f64,
    /// `tasksDone * 2 + hoursTotal`.
    pub productivity_score: f64,
    /// Consecutive days with a log entry, ending today.
    pub log_streak: u32,
}

impl Summary {
    pub fn from_items(
        habits: &[Habit],
        tasks: &[Task],
        logs: &[DailyLog],
        today: NaiveDate,
    ) -> Self {
        let habits_done = habits.iter().filter(|h| h.done_today).count();
        let tasks_done = tasks.iter().filter(|t| t.completed).count();
        let hours_total = logs.iter().fold(0.0, |total, log| total + log.hours);
        let average_mood = if logs.is_empty() {
            0.0
        } else {
            let moods = logs.iter().fold(0.0, |total, log| total + f64::from(log.mood));
            moods / logs.len() as f64
        };

        Self {
            habits_total: habits.len(),
            habits_done,
            habits_pending: habits.len() - habits_done,
            tasks_total: tasks.len(),
            tasks_done,
            tasks_pending: tasks.len() - tasks_done,
            logs_total: logs.len(),
            hours_total,
            average_mood,
            productivity_score: tasks_done as f64 * POINTS_PER_COMPLETED_TASK + hours_total,
            log_streak: log_streak(logs, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_require_title() {
        assert_eq!(require_title("  Walk  ").unwrap(), "Walk");
        assert!(matches!(
            require_title(" \t "),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_summary_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let mut done = Habit::new(Uuid::new_v4(), "done");
        done.mark_done();
        let habits = vec![done, Habit::new(Uuid::new_v4(), "pending")];

        let mut finished = Task::new(Uuid::new_v4(), "finished");
        finished.complete();
        let tasks = vec![
            finished,
            Task::new(Uuid::new_v4(), "open"),
            Task::new(Uuid::new_v4(), "open too"),
        ];

        let logs = vec![
            DailyLog::new(Uuid::new_v4(), 2.5, "", 4, today),
            DailyLog::new(Uuid::new_v4(), 1.5, "", 2, today.pred_opt().unwrap()),
        ];

        assert_eq!(
            Summary::from_items(&habits, &tasks, &logs, today),
            Summary {
                habits_total: 2,
                habits_done: 1,
                habits_pending: 1,
                tasks_total: 3,
                tasks_done: 1,
                tasks_pending: 2,
                logs_total: 2,
                hours_total: 4.0,
                average_mood: 3.0,
                productivity_score: 6.0,
                log_streak: 2,
            }
        );
    }

    #[test]
    fn test_summary_without_logs() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let summary = Summary::from_items(&[], &[], &[], today);

        assert_eq!(summary.logs_total, 0);
        assert_eq!(summary.average_mood, 0.0);
        assert_eq!(summary.productivity_score, 0.0);
        assert_eq!(summary.log_streak, 0);
    }
}
