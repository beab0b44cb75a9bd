//! Command handlers.
//!
//! Each handler receives the composed `CliConfig` and delegates domain work
//! to `dailykit-core` services.

pub mod habits;
pub mod launch;
pub mod paths;
pub mod todo;
