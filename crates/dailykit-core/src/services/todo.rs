//! To-do list service: every mutation is persisted immediately.

use std::sync::Arc;

use tracing::debug;

use crate::domain::TaskList;
use crate::ports::{StoreError, TaskRepository};

/// Owns the in-memory list and writes it back after each change.
pub struct TodoService {
    repo: Arc<dyn TaskRepository>,
    tasks: TaskList,
}

impl TodoService {
    /// Load the current list from `repo`.
    pub fn open(repo: Arc<dyn TaskRepository>) -> Result<Self, StoreError> {
        let tasks = repo.load()?;
        debug!(count = tasks.len(), "Loaded to-do list");
        Ok(Self { repo, tasks })
    }

    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Add a task. Returns the stored text, or `None` if it was blank.
    pub fn add(&mut self, raw: &str) -> Result<Option<String>, StoreError> {
        let Some(added) = self.tasks.add(raw).map(str::to_string) else {
            return Ok(None);
        };
        self.repo.save(&self.tasks)?;
        Ok(Some(added))
    }

    /// Remove the task at 1-based `position`. `None` if out of range.
    pub fn remove(&mut self, position: usize) -> Result<Option<String>, StoreError> {
        let Some(removed) = self.tasks.remove_at(position) else {
            return Ok(None);
        };
        self.repo.save(&self.tasks)?;
        Ok(Some(removed))
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.tasks.clear();
        self.repo.save(&self.tasks)
    }
}
