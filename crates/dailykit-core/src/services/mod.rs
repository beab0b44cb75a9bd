//! Services that sequence domain logic over ports.
//!
//! Services own no infrastructure; adapters hand them trait objects at
//! construction and the CLI drives them.

mod habits;
mod launcher;
mod todo;

pub use habits::{HabitService, HabitSummary};
pub use launcher::{LaunchOutcome, LauncherService};
pub use todo::TodoService;
