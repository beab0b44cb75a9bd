//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `tokio::process` or terminal types in any signature
//! - Repositories load and save whole collections; the files are small
//! - The spawner runs exactly one child per call and never retries

pub mod habit_repository;
pub mod launch_console;
pub mod process_spawner;
pub mod task_repository;

use std::path::PathBuf;

use thiserror::Error;

pub use habit_repository::HabitRepository;
pub use launch_console::LaunchConsole;
pub use process_spawner::ProcessSpawner;
pub use task_repository::TaskRepository;

#[cfg(test)]
pub use habit_repository::MockHabitRepository;
#[cfg(test)]
pub use launch_console::MockLaunchConsole;
#[cfg(test)]
pub use process_spawner::MockProcessSpawner;
#[cfg(test)]
pub use task_repository::MockTaskRepository;

/// Errors from spawning, waiting on, or acknowledging a child process.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The interpreter could not be started.
    #[error("Failed to start '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    /// The child started but waiting for it failed.
    #[error("Failed to wait for child process: {0}")]
    WaitFailed(String),

    /// Reading the acknowledgement from the console failed.
    #[error("Failed to read acknowledgement: {0}")]
    AcknowledgeFailed(String),
}

/// Errors from the JSON data stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read the store file.
    #[error("Failed to read {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    /// Failed to write the store file.
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    /// The store file does not contain the expected JSON.
    #[error("Malformed data in {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Errors from service operations that can fail for more than one reason.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The request cannot be carried out on the current data.
    #[error("{0}")]
    Validation(String),
}
