//! Pure path resolver for diagnostics.
//!
//! Captures every path a launch or app session would touch in one call, so
//! `dailykit paths` shows exactly what the other commands will use.

use std::path::PathBuf;

use super::{PathError, resolve_base_dir, resolve_data_dir, venv_python_candidates};
use crate::settings::{HABITS_FILE, Settings, TASKS_FILE};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Directory launches run from
    pub launch_dir: PathBuf,
    /// Virtual environment interpreter, if one exists
    pub venv_python: Option<PathBuf>,
    /// Interpreter used when no venv interpreter exists
    pub fallback_python: String,
    /// Directory holding the app data files
    pub data_dir: PathBuf,
    /// To-do list store
    pub tasks_file: PathBuf,
    /// Habit tracker store
    pub habits_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths for `settings`.
    ///
    /// `fallback_python` comes from the runtime adapter, which is the only
    /// layer allowed to search `PATH`.
    pub fn resolve(settings: &Settings, fallback_python: &str) -> Result<Self, PathError> {
        let launch_dir = resolve_base_dir(settings.base_dir.as_deref())?;
        let data_dir = resolve_data_dir(settings.base_dir.as_deref())?;
        let venv_python = venv_python_candidates(&launch_dir, &settings.venv_dir)
            .into_iter()
            .find(|candidate| candidate.is_file());

        Ok(Self {
            tasks_file: data_dir.join(TASKS_FILE),
            habits_file: data_dir.join(HABITS_FILE),
            launch_dir,
            venv_python,
            fallback_python: fallback_python.to_string(),
            data_dir,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "launch_dir = {}", self.launch_dir.display())?;
        match &self.venv_python {
            Some(path) => writeln!(f, "venv_python = {}", path.display())?,
            None => writeln!(f, "venv_python = (none)")?,
        }
        writeln!(f, "fallback_python = {}", self.fallback_python)?;
        writeln!(f, "data_dir = {}", self.data_dir.display())?;
        writeln!(f, "tasks_file = {}", self.tasks_file.display())?;
        write!(f, "habits_file = {}", self.habits_file.display())
    }
}
