//! Console interaction around a launch.

use super::ProcessError;

/// The console hosting a launch.
///
/// Only two interactions are needed: surfacing a spawn failure verbatim, and
/// holding the window open until the user acknowledges.
#[cfg_attr(test, mockall::automock)]
pub trait LaunchConsole: Send + Sync {
    /// Print a spawn or wait failure as-is.
    fn report_failure(&self, error: &ProcessError);

    /// Prompt and block until the user acknowledges.
    fn wait_for_acknowledgement(&self) -> Result<(), ProcessError>;
}
