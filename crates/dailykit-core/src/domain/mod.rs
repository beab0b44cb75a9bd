//! Domain types for launching and for the native apps.
//!
//! These are pure data types with behavior that needs no I/O beyond the
//! single existence probe `LaunchPlan::resolve` performs.

mod habit;
mod launch;
mod menu;
mod task;

pub use habit::{Habit, HabitBook, MarkResult, streak};
pub use launch::{ChildExit, Interpreter, LaunchPlan, LaunchTarget, ParseTargetError};
pub use menu::{HabitAction, TodoAction, normalize_choice};
pub use task::TaskList;
