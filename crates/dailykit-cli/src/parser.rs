//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the dailykit launcher and apps.
#[derive(Parser)]
#[command(name = "dailykit")]
#[command(about = "Launch and run the to-do list and habit tracker apps")]
#[command(version)]
pub struct Cli {
    /// Directory to launch from and keep data files in
    #[arg(long = "dir", env = "DAILYKIT_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use dailykit_core::LaunchTarget;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["dailykit", "--verbose", "--dir", "/tmp/apps", "paths"]);
        assert!(cli.verbose);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/apps")));
        assert!(matches!(cli.command, Some(Commands::Paths)));
    }

    #[test]
    fn test_launch_args() {
        let cli = Cli::parse_from(["dailykit", "launch", "habits", "--venv", "env", "--no-pause"]);
        match cli.command {
            Some(Commands::Launch {
                target,
                venv,
                no_pause,
            }) => {
                assert_eq!(target, LaunchTarget::HabitTracker);
                assert_eq!(venv, "env");
                assert!(no_pause);
            }
            _ => panic!("expected launch command"),
        }
    }

    #[test]
    fn test_launch_rejects_unknown_target() {
        assert!(Cli::try_parse_from(["dailykit", "launch", "expenses"]).is_err());
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::parse_from(["dailykit"]);
        assert!(cli.command.is_none());
    }
}
