//! Shared utility functions for fontsync crates

use anyhow::anyhow;
use std::path::PathBuf;

/// Get the user's home directory
///
/// Prefers the HOME (or USERPROFILE) environment variable over
/// dirs::home_dir() so that test harnesses and service accounts can
/// redirect it.
pub fn get_home_dir() -> anyhow::Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")) {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_home_dir_from_env() {
        // HOME is typically set in CI/test environments
        if std::env::var("HOME").is_ok() {
            let home = get_home_dir().unwrap();
            assert!(!home.as_os_str().is_empty());
        }
    }
}
