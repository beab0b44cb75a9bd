//! JSON file stores for the native apps.
//!
//! Files are read whole and rewritten whole on every save. A missing file
//! is created as an empty JSON array on first load.

mod habits;
mod json;
mod tasks;

pub use habits::JsonHabitStore;
pub use tasks::JsonTaskStore;
