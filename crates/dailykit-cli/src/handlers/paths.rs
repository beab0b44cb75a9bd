//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics, using exactly the resolution
//! the `launch`, `todo` and `habits` commands use.

use anyhow::Result;

use dailykit_core::ResolvedPaths;
use dailykit_runtime::fallback_interpreter;

use crate::bootstrap::CliConfig;

/// Execute the paths command.
///
/// Prints one `key = value` line per resolved path.
pub fn execute(config: &CliConfig) -> Result<()> {
    let paths = ResolvedPaths::resolve(&config.settings, &fallback_interpreter())?;
    println!("{paths}");
    Ok(())
}
