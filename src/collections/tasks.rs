use std::sync::Arc;

use log::info;
use uuid::Uuid;

use crate::collections::require_title;
use crate::error::AppError;
use crate::models::Task;
use crate::store::{IdGenerator, InMemoryRepository, RandomIds, Repository};

/// The task collection. Tasks only ever move from open to completed.
#[derive(Clone)]
pub struct Tasks {
    repo: Arc<dyn Repository<Task>>,
    ids: Arc<dyn IdGenerator>,
}

impl Tasks {
    pub fn new(repo: Arc<dyn Repository<Task>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repo, ids }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::new("tasks")),
            Arc::new(RandomIds),
        )
    }

    pub fn list(&self) -> Result<Vec<Task>, AppError> {
        self.repo.list()
    }

    pub fn add(&self, title: &str) -> Result<Task, AppError> {
        let title = require_title(title)?;
        let task = self.repo.add(Task::new(self.ids.next_id(), title))?;
        info!("task {} created: {:?}", task.id, task.title);
        Ok(task)
    }

    pub fn complete(&self, id: Uuid) -> Result<Task, AppError> {
        let task = self
            .repo
            .update_by_id(id, &mut |task: &mut Task| task.complete())?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))?;
        info!("task {} completed", task.id);
        Ok(task)
    }
}
