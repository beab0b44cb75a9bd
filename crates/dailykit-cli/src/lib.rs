//! Command-line adapter for dailykit.
//!
//! Hosts the clap parser, the composition root, the command handlers and the
//! interactive menus shared by the `dailykit`, `launch-todo` and
//! `launch-habits` binaries.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, init_logging};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
