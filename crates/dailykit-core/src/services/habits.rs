//! Habit tracker service: every mutation is persisted immediately.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{Habit, HabitBook, MarkResult, streak};
use crate::ports::{CoreError, HabitRepository, StoreError};

/// One row of the habit view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSummary {
    pub id: u32,
    pub name: String,
    pub streak: u32,
}

/// Owns the in-memory habit book and writes it back after each change.
pub struct HabitService {
    repo: Arc<dyn HabitRepository>,
    book: HabitBook,
}

impl HabitService {
    /// Load the current habits from `repo`.
    pub fn open(repo: Arc<dyn HabitRepository>) -> Result<Self, StoreError> {
        let book = repo.load()?;
        debug!(count = book.len(), "Loaded habits");
        Ok(Self { repo, book })
    }

    pub const fn book(&self) -> &HabitBook {
        &self.book
    }

    /// Track a new habit created on `today`.
    ///
    /// Blank names are rejected with `Ok(None)`. Fails with
    /// `CoreError::Validation` when the book has run out of ids.
    pub fn add(&mut self, name: &str, today: NaiveDate) -> Result<Option<Habit>, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        let Some(habit) = self.book.add(name, today).cloned() else {
            return Err(CoreError::Validation(format!(
                "Cannot add a habit: no ID is available after {}.",
                u32::MAX
            )));
        };
        self.repo.save(&self.book)?;
        Ok(Some(habit))
    }

    /// Stop tracking the habit with `id`.
    pub fn delete(&mut self, id: u32) -> Result<Option<Habit>, StoreError> {
        let Some(removed) = self.book.remove(id) else {
            return Ok(None);
        };
        self.repo.save(&self.book)?;
        Ok(Some(removed))
    }

    /// Record `today` for the habit with `id`. Persists only on `Marked`.
    pub fn mark_complete(&mut self, id: u32, today: NaiveDate) -> Result<MarkResult, StoreError> {
        let result = self.book.mark_complete(id, today);
        if result == MarkResult::Marked {
            self.repo.save(&self.book)?;
        }
        Ok(result)
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.book.clear();
        self.repo.save(&self.book)
    }

    /// Rows for the habit view, with streaks as of `today`.
    pub fn summaries(&self, today: NaiveDate) -> Vec<HabitSummary> {
        self.book
            .habits()
            .iter()
            .map(|habit| HabitSummary {
                id: habit.id,
                name: habit.name.clone(),
                streak: streak(habit, today),
            })
            .collect()
    }
}
