//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. Concrete implementations from `dailykit-runtime`
//! are instantiated here and handed to core services as trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dailykit_core::{
    HABITS_FILE, HabitService, LauncherService, PathError, Settings, StoreError, TASKS_FILE,
    TodoService, resolve_data_dir,
};
use dailykit_runtime::{JsonHabitStore, JsonTaskStore, TerminalConsole, TokioProcessSpawner};
use tracing_subscriber::EnvFilter;

/// Initialize diagnostic logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or debug
/// output for this workspace when `verbose` is on. Stdout is left to the
/// apps and the launched child.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "warn,dailykit_core=debug,dailykit_runtime=debug,dailykit_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. in tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Defaults used by the no-argument launchers.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Build from parsed global and launch options.
    pub fn from_args(dir: Option<PathBuf>, venv: Option<&str>, pause: bool) -> Self {
        let mut settings = Settings::default().with_pause(pause);
        if let Some(dir) = dir {
            settings = settings.with_base_dir(dir);
        }
        if let Some(venv) = venv {
            settings = settings.with_venv_dir(venv);
        }
        Self { settings }
    }

    /// Compose the launcher service over the real process and terminal.
    pub fn launcher(&self) -> LauncherService {
        LauncherService::new(
            Arc::new(TokioProcessSpawner::new()),
            Arc::new(TerminalConsole::new()),
        )
        .with_pause(self.settings.pause)
    }

    /// Directory holding the app data files.
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        resolve_data_dir(self.settings.base_dir.as_deref())
    }

    /// Open the to-do list stored in `data_dir`.
    pub fn todo_service(data_dir: &Path) -> Result<TodoService, StoreError> {
        TodoService::open(Arc::new(JsonTaskStore::new(data_dir.join(TASKS_FILE))))
    }

    /// Open the habits stored in `data_dir`.
    pub fn habit_service(data_dir: &Path) -> Result<HabitService, StoreError> {
        HabitService::open(Arc::new(JsonHabitStore::new(data_dir.join(HABITS_FILE))))
    }
}
