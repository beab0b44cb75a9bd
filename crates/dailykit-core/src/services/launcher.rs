//! Launch sequencing: spawn, wait, surface failure, hold the console.
//!
//! The sequence is strictly linear. A spawn failure does not skip the
//! acknowledgement step, and nothing is retried.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{ChildExit, LaunchPlan};
use crate::ports::{LaunchConsole, ProcessError, ProcessSpawner};

/// Result of one launch.
#[derive(Debug)]
pub struct LaunchOutcome {
    /// How the child finished, or why it never ran.
    pub exit: Result<ChildExit, ProcessError>,
    /// Whether the user acknowledged before the launcher returned.
    pub acknowledged: bool,
}

impl LaunchOutcome {
    /// Exit code of the child, when it ran and exited normally.
    pub fn child_code(&self) -> Option<i32> {
        self.exit.as_ref().ok().and_then(|exit| exit.code)
    }
}

/// Runs launch plans against a spawner and a console.
pub struct LauncherService {
    spawner: Arc<dyn ProcessSpawner>,
    console: Arc<dyn LaunchConsole>,
    pause: bool,
}

impl LauncherService {
    pub fn new(spawner: Arc<dyn ProcessSpawner>, console: Arc<dyn LaunchConsole>) -> Self {
        Self {
            spawner,
            console,
            pause: true,
        }
    }

    /// Skip the acknowledgement step. Used for scripted runs.
    #[must_use]
    pub const fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    /// Execute `plan` once and hold the console afterwards.
    pub async fn run(&self, plan: &LaunchPlan) -> LaunchOutcome {
        info!(
            working_dir = %plan.working_dir.display(),
            interpreter = %plan.interpreter,
            "Launching {}",
            plan.script
        );

        let exit = self.spawner.run(plan).await;
        match &exit {
            Ok(status) => debug!(code = ?status.code, "Child process exited"),
            Err(err) => {
                warn!("Launch failed: {err}");
                self.console.report_failure(err);
            }
        }

        let acknowledged = self.hold_console();
        LaunchOutcome { exit, acknowledged }
    }

    /// Wait for the user before returning, unless pausing is disabled.
    ///
    /// Also used by callers that fail before a plan exists, so the console
    /// stays readable on every path.
    pub fn hold_console(&self) -> bool {
        if !self.pause {
            return false;
        }
        match self.console.wait_for_acknowledgement() {
            Ok(()) => true,
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Interpreter, LaunchTarget};
    use crate::ports::{MockLaunchConsole, MockProcessSpawner};
    use mockall::Sequence;
    use std::path::PathBuf;

    fn venv_plan() -> LaunchPlan {
        LaunchPlan {
            working_dir: PathBuf::from("/apps/daily"),
            interpreter: Interpreter::Venv(PathBuf::from("/apps/daily/.venv/Scripts/python.exe")),
            script: LaunchTarget::TodoList.script_name().to_string(),
        }
    }

    #[tokio::test]
    async fn spawns_once_then_waits_for_acknowledgement() {
        let mut seq = Sequence::new();
        let mut spawner = MockProcessSpawner::new();
        let mut console = MockLaunchConsole::new();

        spawner
            .expect_run()
            .withf(|plan| {
                plan.working_dir == PathBuf::from("/apps/daily")
                    && plan.interpreter.is_venv()
                    && plan.args() == ["To-Do_list_Application.py"]
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ChildExit::new(Some(0))));
        console.expect_report_failure().never();
        console
            .expect_wait_for_acknowledgement()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let service = LauncherService::new(Arc::new(spawner), Arc::new(console));
        let outcome = service.run(&venv_plan()).await;

        assert!(outcome.acknowledged);
        assert_eq!(outcome.child_code(), Some(0));
    }

    #[tokio::test]
    async fn failing_child_still_pauses() {
        let mut spawner = MockProcessSpawner::new();
        let mut console = MockLaunchConsole::new();

        spawner
            .expect_run()
            .times(1)
            .returning(|_| Ok(ChildExit::new(Some(3))));
        console.expect_report_failure().never();
        console
            .expect_wait_for_acknowledgement()
            .times(1)
            .returning(|| Ok(()));

        let service = LauncherService::new(Arc::new(spawner), Arc::new(console));
        let outcome = service.run(&venv_plan()).await;

        assert!(outcome.acknowledged);
        assert_eq!(outcome.child_code(), Some(3));
    }

    #[tokio::test]
    async fn spawn_failure_is_reported_before_pause() {
        let mut seq = Sequence::new();
        let mut spawner = MockProcessSpawner::new();
        let mut console = MockLaunchConsole::new();

        spawner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|plan| {
                Err(ProcessError::SpawnFailed {
                    program: plan.interpreter.program().to_string_lossy().into_owned(),
                    reason: "program not found".to_string(),
                })
            });
        console
            .expect_report_failure()
            .withf(|err| err.to_string().contains("program not found"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        console
            .expect_wait_for_acknowledgement()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let service = LauncherService::new(Arc::new(spawner), Arc::new(console));
        let outcome = service.run(&venv_plan()).await;

        assert!(outcome.exit.is_err());
        assert!(outcome.acknowledged);
        assert_eq!(outcome.child_code(), None);
    }

    #[tokio::test]
    async fn no_pause_skips_acknowledgement() {
        let mut spawner = MockProcessSpawner::new();
        let mut console = MockLaunchConsole::new();

        spawner
            .expect_run()
            .times(1)
            .returning(|_| Ok(ChildExit::new(Some(0))));
        console.expect_wait_for_acknowledgement().never();

        let service =
            LauncherService::new(Arc::new(spawner), Arc::new(console)).with_pause(false);
        let outcome = service.run(&venv_plan()).await;

        assert!(!outcome.acknowledged);
    }

    #[tokio::test]
    async fn failed_acknowledgement_is_not_fatal() {
        let mut spawner = MockProcessSpawner::new();
        let mut console = MockLaunchConsole::new();

        spawner
            .expect_run()
            .times(1)
            .returning(|_| Ok(ChildExit::new(Some(0))));
        console
            .expect_wait_for_acknowledgement()
            .times(1)
            .returning(|| Err(ProcessError::AcknowledgeFailed("stdin closed".to_string())));

        let service = LauncherService::new(Arc::new(spawner), Arc::new(console));
        let outcome = service.run(&venv_plan()).await;

        assert!(!outcome.acknowledged);
        assert_eq!(outcome.child_code(), Some(0));
    }
}
