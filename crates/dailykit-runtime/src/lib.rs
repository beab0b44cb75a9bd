//! OS adapters for dailykit.
//!
//! Implements the `dailykit-core` ports against the real system: interpreter
//! discovery on `PATH`, child processes via `tokio::process`, the terminal
//! acknowledgement prompt, and the JSON data files.

#![deny(unsafe_code)]

mod console;
mod interpreter;
mod spawner;
pub mod store;

pub use console::{PAUSE_PROMPT, TerminalConsole};
pub use interpreter::{FALLBACK_CANDIDATES, fallback_interpreter};
pub use spawner::TokioProcessSpawner;
pub use store::{JsonHabitStore, JsonTaskStore};
