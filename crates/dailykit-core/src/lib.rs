//! Core domain types, ports and services for dailykit.
//!
//! This crate holds everything that does not touch a terminal or spawn a
//! process: launch planning, the to-do and habit domain models, the port
//! traits that adapters implement, and the services that sequence them.
//! Concrete adapters live in `dailykit-runtime`; the CLI wires them together.

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ChildExit, Habit, HabitAction, HabitBook, Interpreter, LaunchPlan, LaunchTarget, MarkResult,
    ParseTargetError, TaskList, TodoAction, streak,
};
pub use paths::{
    PathError, ResolvedPaths, resolve_base_dir, resolve_data_dir, resolve_launcher_dir,
    venv_python_candidates,
};
pub use ports::{
    CoreError, HabitRepository, LaunchConsole, ProcessError, ProcessSpawner, StoreError,
    TaskRepository,
};
pub use services::{HabitService, HabitSummary, LaunchOutcome, LauncherService, TodoService};
pub use settings::{DEFAULT_VENV_DIR, HABITS_FILE, Settings, TASKS_FILE};
