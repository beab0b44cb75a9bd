//! Main commands enum.

use clap::Subcommand;
use dailykit_core::{DEFAULT_VENV_DIR, LaunchTarget};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run an app's Python script, preferring the local virtual environment
    Launch {
        /// App to launch: "todo" or "habits"
        target: LaunchTarget,
        /// Virtual environment directory, relative to the launch directory
        #[arg(long, env = "DAILYKIT_VENV", default_value = DEFAULT_VENV_DIR)]
        venv: String,
        /// Exit as soon as the app does instead of waiting for a keypress
        #[arg(long)]
        no_pause: bool,
    },

    /// Run the to-do list natively
    Todo,

    /// Run the habit tracker natively
    Habits,

    /// Show resolved launcher, interpreter and data paths
    Paths,
}
