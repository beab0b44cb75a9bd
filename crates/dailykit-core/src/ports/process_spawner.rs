//! Process spawner trait definition.
//!
//! This port runs one interpreter invocation to completion. Implementations
//! inherit the parent's console so the child talks to the user directly.

use async_trait::async_trait;

use super::ProcessError;
use crate::domain::{ChildExit, LaunchPlan};

/// Runs a launch plan as a child process.
///
/// # Contract
///
/// - Exactly one child per call; no retry and no timeout
/// - The child's working directory is `plan.working_dir`
/// - The child receives `plan.args()` and nothing else
/// - stdin/stdout/stderr are inherited, never captured
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProcessSpawner: Send + Sync {
    /// Spawn the child and wait for it to exit.
    async fn run(&self, plan: &LaunchPlan) -> Result<ChildExit, ProcessError>;
}
