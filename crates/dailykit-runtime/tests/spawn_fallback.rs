//! Spawner behavior for fallback interpreters resolved through `PATH`.

#![cfg(unix)]

use dailykit_core::ports::{ProcessError, ProcessSpawner};
use dailykit_core::{Interpreter, LaunchPlan, LaunchTarget};
use dailykit_runtime::TokioProcessSpawner;
use tempfile::TempDir;

#[tokio::test]
async fn missing_interpreter_surfaces_spawn_failure() {
    let dir = TempDir::new().unwrap();
    let plan = LaunchPlan {
        working_dir: dir.path().to_path_buf(),
        interpreter: Interpreter::Fallback("dailykit-no-such-python".to_string()),
        script: LaunchTarget::HabitTracker.script_name().to_string(),
    };

    let err = TokioProcessSpawner::new().run(&plan).await.unwrap_err();
    match err {
        ProcessError::SpawnFailed { program, .. } => {
            assert_eq!(program, "dailykit-no-such-python");
        }
        other => panic!("expected SpawnFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn zero_exit_is_success() {
    let dir = TempDir::new().unwrap();
    let plan = LaunchPlan {
        working_dir: dir.path().to_path_buf(),
        interpreter: Interpreter::Fallback("true".to_string()),
        script: LaunchTarget::TodoList.script_name().to_string(),
    };

    let exit = TokioProcessSpawner::new().run(&plan).await.unwrap();
    assert!(exit.success());
}
