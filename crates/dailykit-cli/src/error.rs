//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`; this module classifies a failed
//! handler by the typed error inside it and maps that to an exit code.

use std::io;

use dailykit_core::{CoreError, PathError, ProcessError, StoreError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Any failure without a more specific category.
    #[error("{0}")]
    Core(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Data store error.
    #[error("Data error: {0}")]
    Store(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    ///
    /// Argument errors never get here; clap exits with 2 itself.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Store(_) => 65,   // EX_DATAERR
            Self::Process(_) => 71, // EX_OSERR
            Self::Io(_) => 74,      // EX_IOERR
        }
    }

    /// Classify a handler failure by the first typed error in its chain.
    ///
    /// The message keeps the whole chain, context included.
    pub fn from_handler(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        for cause in err.chain() {
            if let Some(core) = cause.downcast_ref::<CoreError>() {
                return match core {
                    CoreError::Store(_) => Self::Store(message),
                    CoreError::Validation(_) => Self::Core(message),
                };
            }
            if cause.is::<StoreError>() {
                return Self::Store(message);
            }
            if cause.is::<PathError>() || cause.is::<io::Error>() {
                return Self::Io(message);
            }
            if cause.is::<ProcessError>() {
                return Self::Process(message);
            }
        }
        Self::Core(message)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::path::PathBuf;

    fn store_error() -> StoreError {
        StoreError::Parse {
            path: PathBuf::from("tasks.json"),
            reason: "expected value at line 1 column 1".into(),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Core("x".into()).exit_code(), 1);
        assert_eq!(CliError::Store("x".into()).exit_code(), 65);
        assert_eq!(CliError::Process("x".into()).exit_code(), 71);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
    }

    #[test]
    fn test_malformed_store_is_a_data_error() {
        let err = anyhow::Error::new(store_error());
        let cli = CliError::from_handler(&err);
        assert_eq!(cli.exit_code(), 65);
        assert!(cli.to_string().contains("tasks.json"));

        let wrapped = anyhow::Error::new(CoreError::from(store_error()));
        assert_eq!(CliError::from_handler(&wrapped).exit_code(), 65);
    }

    #[test]
    fn test_path_and_io_errors_are_io() {
        let path = anyhow::Error::new(PathError::NotADirectory(PathBuf::from("/nope")));
        assert_eq!(CliError::from_handler(&path).exit_code(), 74);

        let io_err: anyhow::Result<()> =
            Err(io::Error::other("closed")).context("Failed to write output");
        let cli = CliError::from_handler(&io_err.unwrap_err());
        assert!(matches!(cli, CliError::Io(ref msg) if msg == "Failed to write output: closed"));
    }

    #[test]
    fn test_spawn_failure_is_process_error() {
        let err = anyhow::Error::new(ProcessError::SpawnFailed {
            program: "py".into(),
            reason: "not found".into(),
        });
        assert!(matches!(
            CliError::from_handler(&err),
            CliError::Process(ref msg) if msg.contains("'py'")
        ));
    }

    #[test]
    fn test_unclassified_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(CliError::from_handler(&err).exit_code(), 1);

        let validation = anyhow::Error::new(CoreError::Validation("full".into()));
        assert_eq!(CliError::from_handler(&validation).exit_code(), 1);
    }
}
