//! Settings domain types.
//!
//! Pure configuration values with no infrastructure dependencies. Adapters
//! fill these from arguments, environment or `.env` files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default name of the directory-local virtual environment.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// File name of the to-do list store, relative to the data directory.
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the habit store, relative to the data directory.
pub const HABITS_FILE: &str = "habits.json";

/// Launcher and app settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory to launch from and keep data in.
    ///
    /// `None` means the launcher's own directory (for launches) or the
    /// current working directory (for the native apps).
    pub base_dir: Option<PathBuf>,

    /// Name of the virtual environment directory inside `base_dir`.
    pub venv_dir: String,

    /// Whether to wait for an acknowledgement after the child exits.
    pub pause: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: None,
            venv_dir: DEFAULT_VENV_DIR.to_string(),
            pause: true,
        }
    }
}

impl Settings {
    /// Override the base directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Override the virtual environment directory name.
    ///
    /// Blank names are ignored so a stray empty env var cannot point the
    /// launcher at the base directory itself.
    #[must_use]
    pub fn with_venv_dir(mut self, name: &str) -> Self {
        let name = name.trim();
        if !name.is_empty() {
            self.venv_dir = name.to_string();
        }
        self
    }

    /// Enable or disable the final pause.
    #[must_use]
    pub const fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_dir, None);
        assert_eq!(settings.venv_dir, ".venv");
        assert!(settings.pause);
    }

    #[test]
    fn test_blank_venv_override_is_ignored() {
        let settings = Settings::default().with_venv_dir("   ");
        assert_eq!(settings.venv_dir, DEFAULT_VENV_DIR);

        let settings = Settings::default().with_venv_dir("env");
        assert_eq!(settings.venv_dir, "env");
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"pause": false}"#).unwrap();
        assert!(!settings.pause);
        assert_eq!(settings.venv_dir, DEFAULT_VENV_DIR);
    }
}
