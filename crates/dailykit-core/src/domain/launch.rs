//! Launch planning: which app, which interpreter, which directory.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::paths::venv_python_candidates;

/// An app the launcher knows how to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTarget {
    /// The to-do list app.
    TodoList,
    /// The habit tracker app.
    HabitTracker,
}

impl LaunchTarget {
    /// Every known target, in menu order.
    pub const ALL: [Self; 2] = [Self::TodoList, Self::HabitTracker];

    /// File name of the script, expected next to the launcher.
    pub const fn script_name(self) -> &'static str {
        match self {
            Self::TodoList => "To-Do_list_Application.py",
            Self::HabitTracker => "Habit_Tracker.py",
        }
    }

    /// Human-readable app name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::TodoList => "To-Do List Application",
            Self::HabitTracker => "Habit Tracker",
        }
    }

    /// Short name used on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TodoList => "todo",
            Self::HabitTracker => "habits",
        }
    }
}

impl fmt::Display for LaunchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a launch target name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown launch target '{0}' (expected 'todo' or 'habits')")]
pub struct ParseTargetError(pub String);

impl FromStr for LaunchTarget {
    type Err = ParseTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "to-do" | "todo-list" | "tasks" => Ok(Self::TodoList),
            "habits" | "habit" | "habit-tracker" => Ok(Self::HabitTracker),
            other => Err(ParseTargetError(other.to_string())),
        }
    }
}

/// The interpreter a launch will run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpreter {
    /// Interpreter inside the directory-local virtual environment.
    Venv(PathBuf),
    /// System-registered launcher, resolved through `PATH` at spawn time.
    Fallback(String),
}

impl Interpreter {
    /// Program to hand to the process spawner.
    pub fn program(&self) -> &OsStr {
        match self {
            Self::Venv(path) => path.as_os_str(),
            Self::Fallback(name) => OsStr::new(name),
        }
    }

    pub const fn is_venv(&self) -> bool {
        matches!(self, Self::Venv(_))
    }
}

impl fmt::Display for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Venv(path) => write!(f, "{} (venv)", path.display()),
            Self::Fallback(name) => write!(f, "{name} (fallback)"),
        }
    }
}

/// Everything needed to spawn one app: directory, interpreter, script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    /// Working directory for the child; always the launcher's directory.
    pub working_dir: PathBuf,
    pub interpreter: Interpreter,
    /// Script file name, passed as the sole argument.
    pub script: String,
}

impl LaunchPlan {
    /// Build a plan for `target` rooted at `base`.
    ///
    /// Prefers the first existing interpreter inside `base/venv_dir`;
    /// otherwise uses `fallback`.
    pub fn resolve(
        base: &Path,
        target: LaunchTarget,
        venv_dir: &str,
        fallback: impl Into<String>,
    ) -> Self {
        let interpreter = venv_python_candidates(base, venv_dir)
            .into_iter()
            .find(|candidate| candidate.is_file())
            .map_or_else(|| Interpreter::Fallback(fallback.into()), Interpreter::Venv);

        debug!(
            app = %target,
            interpreter = %interpreter,
            "Resolved launch plan in {}",
            base.display()
        );

        Self {
            working_dir: base.to_path_buf(),
            interpreter,
            script: target.script_name().to_string(),
        }
    }

    /// Arguments passed to the interpreter.
    pub fn args(&self) -> [&str; 1] {
        [self.script.as_str()]
    }

    /// The command line as it would be typed, for logs and `paths` output.
    pub fn command_line(&self) -> String {
        format!(
            "{} {}",
            Path::new(self.interpreter.program()).display(),
            self.script
        )
    }
}

/// How a child process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildExit {
    /// Exit code, or `None` when the child was killed by a signal.
    pub code: Option<i32>,
}

impl ChildExit {
    pub const fn new(code: Option<i32>) -> Self {
        Self { code }
    }

    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}
