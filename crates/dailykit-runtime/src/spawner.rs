//! Child process execution via `tokio::process`.

use std::process::Stdio;

use async_trait::async_trait;
use dailykit_core::ports::{ProcessError, ProcessSpawner};
use dailykit_core::{ChildExit, LaunchPlan};
use tokio::process::Command;
use tracing::debug;

/// Spawns the interpreter with the console inherited and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioProcessSpawner;

impl TokioProcessSpawner {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessSpawner for TokioProcessSpawner {
    async fn run(&self, plan: &LaunchPlan) -> Result<ChildExit, ProcessError> {
        let program = plan.interpreter.program();

        let mut child = Command::new(program)
            .args(plan.args())
            .current_dir(&plan.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed {
                program: program.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;

        debug!(pid = ?child.id(), "Spawned {}", plan.command_line());

        let status = child
            .wait()
            .await
            .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;

        Ok(ChildExit::new(status.code()))
    }
}
