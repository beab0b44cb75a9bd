//! Shared CLI helpers.

pub mod input;

pub use input::Prompter;
