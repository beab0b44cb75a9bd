//! `habits.json` store.

use std::path::{Path, PathBuf};

use dailykit_core::HabitBook;
use dailykit_core::ports::{HabitRepository, StoreError};

use super::json::{self, Layout};

/// Habits persisted as an indented JSON array of objects.
#[derive(Debug, Clone)]
pub struct JsonHabitStore {
    path: PathBuf,
}

impl JsonHabitStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HabitRepository for JsonHabitStore {
    fn load(&self) -> Result<HabitBook, StoreError> {
        json::load_or_init(&self.path)
    }

    fn save(&self, habits: &HabitBook) -> Result<(), StoreError> {
        json::save(&self.path, habits, Layout::Pretty)
    }
}
