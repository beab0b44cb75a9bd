//! Fallback interpreter discovery.
//!
//! Used only when no virtual environment interpreter exists next to the
//! launcher.

use tracing::debug;

/// System launchers to try, in order.
#[cfg(target_os = "windows")]
pub const FALLBACK_CANDIDATES: &[&str] = &["py"];

/// System launchers to try, in order.
#[cfg(not(target_os = "windows"))]
pub const FALLBACK_CANDIDATES: &[&str] = &["python3", "python"];

/// Name of the system interpreter launcher to spawn.
///
/// Returns the first candidate found on `PATH`. When none is found the first
/// candidate is returned anyway so the spawn fails with the OS's own error,
/// which the launcher surfaces unchanged.
pub fn fallback_interpreter() -> String {
    FALLBACK_CANDIDATES
        .iter()
        .find(|candidate| which::which(candidate).is_ok())
        .map_or_else(
            || {
                debug!(
                    "No fallback interpreter on PATH (tried: {})",
                    FALLBACK_CANDIDATES.join(", ")
                );
                FALLBACK_CANDIDATES[0]
            },
            |found| *found,
        )
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_a_known_candidate() {
        let chosen = fallback_interpreter();
        assert!(FALLBACK_CANDIDATES.contains(&chosen.as_str()));
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_uses_py_launcher() {
        assert_eq!(fallback_interpreter(), "py");
    }
}
