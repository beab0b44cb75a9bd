//! Path-related error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving launcher and data paths.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the path of the running executable.
    #[error("Cannot determine launcher location: {0}")]
    CurrentExe(String),

    /// The executable path has no parent directory.
    #[error("Launcher path {0} has no parent directory")]
    NoParent(PathBuf),

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// A path was expected to be a directory but was not.
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}
