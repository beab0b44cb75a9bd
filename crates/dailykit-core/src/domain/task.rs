//! To-do list domain type.

use serde::{Deserialize, Serialize};

/// An ordered list of tasks, serialized as a bare JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<String>,
}

impl TaskList {
    pub const fn new(tasks: Vec<String>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Append a task. Surrounding whitespace is trimmed; blank tasks are
    /// rejected and `None` is returned.
    pub fn add(&mut self, task: &str) -> Option<&str> {
        let task = task.trim();
        if task.is_empty() {
            return None;
        }
        self.tasks.push(task.to_string());
        self.tasks.last().map(String::as_str)
    }

    /// Remove the task at the 1-based `position` shown to users.
    pub fn remove_at(&mut self, position: usize) -> Option<String> {
        let index = position.checked_sub(1)?;
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Tasks paired with their 1-based positions.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task.as_str()))
    }
}
