//! Launcher and data directory resolution.

use std::env;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Directory containing the running executable.
///
/// This is where the launcher expects its scripts and virtual environment,
/// independent of the directory it was invoked from. Symlink handling is
/// whatever `current_exe` does on the platform: Linux reads
/// `/proc/self/exe`, so a symlinked launcher resolves to its target's
/// directory, while macOS and Windows may report the path it was started
/// through.
pub fn resolve_launcher_dir() -> Result<PathBuf, PathError> {
    let exe = env::current_exe().map_err(|e| PathError::CurrentExe(e.to_string()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(PathError::NoParent(exe))
}

/// Resolve the base directory for a launch.
///
/// An explicit directory wins and must exist; otherwise the launcher's own
/// directory is used.
pub fn resolve_base_dir(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(dir) => existing_dir(dir),
        None => resolve_launcher_dir(),
    }
}

/// Resolve the directory holding `tasks.json` / `habits.json`.
///
/// An explicit directory wins and must exist; otherwise the current working
/// directory is used, which the launcher has already pointed at itself.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, PathError> {
    match explicit {
        Some(dir) => existing_dir(dir),
        None => env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string())),
    }
}

/// Absolute form of `dir`, which must exist. Callers may change the working
/// directory afterwards, so relative paths are never handed out.
fn existing_dir(dir: &Path) -> Result<PathBuf, PathError> {
    if !dir.is_dir() {
        return Err(PathError::NotADirectory(dir.to_path_buf()));
    }
    std::path::absolute(dir).map_err(|e| PathError::CurrentDirError(e.to_string()))
}
