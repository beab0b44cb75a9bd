//! Platform-specific virtual environment layout.

use std::path::{Path, PathBuf};

/// Interpreter paths to probe inside `base/venv_dir`, in preference order.
///
/// Windows venvs keep the interpreter at `Scripts/python.exe`; POSIX venvs
/// use `bin/python3` with `bin/python` as a fallback.
pub fn venv_python_candidates(base: &Path, venv_dir: &str) -> Vec<PathBuf> {
    let env_dir = base.join(venv_dir);
    if cfg!(windows) {
        vec![env_dir.join("Scripts").join("python.exe")]
    } else {
        let bin = env_dir.join("bin");
        vec![bin.join("python3"), bin.join("python")]
    }
}
