//! `tasks.json` store.

use std::path::{Path, PathBuf};

use dailykit_core::TaskList;
use dailykit_core::ports::{StoreError, TaskRepository};

use super::json::{self, Layout};

/// To-do list persisted as a compact JSON array of strings.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    path: PathBuf,
}

impl JsonTaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskRepository for JsonTaskStore {
    fn load(&self) -> Result<TaskList, StoreError> {
        json::load_or_init(&self.path)
    }

    fn save(&self, tasks: &TaskList) -> Result<(), StoreError> {
        json::save(&self.path, tasks, Layout::Compact)
    }
}
