//! Shared JSON file helpers.

use std::fs;
use std::path::Path;

use dailykit_core::ports::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Output layout for a store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Layout {
    Compact,
    /// Two-space indentation.
    Pretty,
}

/// Read `path`, creating it as `[]` first if it does not exist.
pub(super) fn load_or_init<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        debug!("Creating empty store at {}", path.display());
        fs::write(path, "[]").map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let content = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| StoreError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Replace the contents of `path` with `value`.
pub(super) fn save<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    layout: Layout,
) -> Result<(), StoreError> {
    let encoded = match layout {
        Layout::Compact => serde_json::to_string(value),
        Layout::Pretty => serde_json::to_string_pretty(value),
    }
    .map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    fs::write(path, encoded).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
