//! Persistence port for tracked habits.

use super::StoreError;
use crate::domain::HabitBook;

/// Loads and saves the whole habit book.
#[cfg_attr(test, mockall::automock)]
pub trait HabitRepository: Send + Sync {
    /// Load all habits, initializing an empty store if none exists yet.
    fn load(&self) -> Result<HabitBook, StoreError>;

    /// Replace the stored habits.
    fn save(&self, habits: &HabitBook) -> Result<(), StoreError>;
}
