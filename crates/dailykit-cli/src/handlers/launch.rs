//! Launch command handler.
//!
//! Runs the fixed launcher sequence: move into the launch directory, pick the
//! venv or fallback interpreter, run the app script once, then hold the
//! console until the user acknowledges.

use std::env;

use dailykit_core::{LaunchPlan, LaunchTarget, ProcessError, resolve_base_dir};
use dailykit_runtime::fallback_interpreter;
use tracing::debug;

use crate::bootstrap::{CliConfig, init_logging};
use crate::error::CliError;

/// Execute a launch and return the process exit code to use.
///
/// The code is the child's own exit code when it has one. Failures before
/// or during spawning are printed as-is and mapped through `CliError`; the
/// console is held in every case.
pub async fn execute(config: &CliConfig, target: LaunchTarget) -> i32 {
    let launcher = config.launcher();

    let base_dir = match resolve_base_dir(config.settings.base_dir.as_deref()) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{err}");
            launcher.hold_console();
            return CliError::Io(err.to_string()).exit_code();
        }
    };

    if let Err(err) = env::set_current_dir(&base_dir) {
        eprintln!("Cannot change directory to {}: {err}", base_dir.display());
        launcher.hold_console();
        return CliError::from(err).exit_code();
    }
    debug!("Working directory set to {}", base_dir.display());

    let plan = LaunchPlan::resolve(
        &base_dir,
        target,
        &config.settings.venv_dir,
        fallback_interpreter(),
    );

    let outcome = launcher.run(&plan).await;
    match outcome.exit {
        Ok(exit) => exit.code.unwrap_or(1),
        Err(err) => exit_code_for(&err),
    }
}

/// Entry point for the no-argument launcher binaries.
///
/// Reads no arguments and no configuration: the launch directory is the
/// executable's own directory and the venv is `.venv`.
pub async fn run_default(target: LaunchTarget) -> i32 {
    init_logging(false);
    execute(&CliConfig::with_defaults(), target).await
}

fn exit_code_for(err: &ProcessError) -> i32 {
    CliError::Process(err.to_string()).exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failure_exit_code() {
        let err = ProcessError::SpawnFailed {
            program: "py".into(),
            reason: "not found".into(),
        };
        assert_eq!(exit_code_for(&err), 71);
    }
}
