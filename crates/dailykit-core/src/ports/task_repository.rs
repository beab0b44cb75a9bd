//! Persistence port for the to-do list.

use super::StoreError;
use crate::domain::TaskList;

/// Loads and saves the whole task list.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Load the list, initializing an empty store if none exists yet.
    fn load(&self) -> Result<TaskList, StoreError>;

    /// Replace the stored list.
    fn save(&self, tasks: &TaskList) -> Result<(), StoreError>;
}
