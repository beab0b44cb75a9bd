//! Path utilities for the launcher directory, virtual environment and
//! data files.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user output separately
//! - OS-specific layout differences are kept private in `platform`

mod error;
mod launcher;
mod platform;
mod resolver;

// Error type
pub use error::PathError;

// Launcher location
pub use launcher::{resolve_base_dir, resolve_data_dir, resolve_launcher_dir};

// Virtual environment layout
pub use platform::venv_python_candidates;

// Pure resolver for diagnostics
pub use resolver::ResolvedPaths;
