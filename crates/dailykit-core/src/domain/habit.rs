//! Habit tracking domain types and streak math.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// A tracked habit.
///
/// The serialized field names match the on-disk format of existing
/// `habits.json` files, including the space in `created on`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u32,
    pub name: String,
    #[serde(rename = "created on")]
    pub created_on: NaiveDate,
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
}

impl Habit {
    /// Create a habit with no completion history.
    pub fn new(id: u32, name: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            created_on,
            completed_dates: Vec::new(),
        }
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }
}

/// Outcome of marking a habit complete for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkResult {
    /// The day was recorded.
    Marked,
    /// The day was already recorded; nothing changed.
    AlreadyMarked,
    /// No habit has the requested id.
    NotFound,
}

/// Count consecutive completed days ending on `today`.
///
/// Returns 0 when `today` itself is not completed.
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    let completed: HashSet<NaiveDate> = habit.completed_dates.iter().copied().collect();

    let mut count = 0;
    let mut day = Some(today);
    while let Some(current) = day
        && completed.contains(&current)
    {
        count += 1;
        day = current.checked_sub_days(Days::new(1));
    }
    count
}

/// The ordered collection of tracked habits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitBook {
    habits: Vec<Habit>,
}

impl HabitBook {
    pub const fn new(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn get(&self, id: u32) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// One past the highest id in use, or 1 for an empty book.
    ///
    /// `None` once the highest id is `u32::MAX`.
    pub fn next_id(&self) -> Option<u32> {
        self.habits
            .iter()
            .map(|h| h.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Append a new habit created on `today` and return it.
    ///
    /// Returns `None` without adding anything when no id is left.
    pub fn add(&mut self, name: impl Into<String>, today: NaiveDate) -> Option<&Habit> {
        let id = self.next_id()?;
        self.habits.push(Habit::new(id, name, today));
        self.habits.last()
    }

    /// Remove the habit with `id`, returning it if it existed.
    pub fn remove(&mut self, id: u32) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        Some(self.habits.remove(index))
    }

    /// Record `today` as completed for the habit with `id`.
    pub fn mark_complete(&mut self, id: u32, today: NaiveDate) -> MarkResult {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return MarkResult::NotFound;
        };

        if habit.is_completed_on(today) {
            return MarkResult::AlreadyMarked;
        }

        habit.completed_dates.push(today);
        MarkResult::Marked
    }

    pub fn clear(&mut self) {
        self.habits.clear();
    }
}
