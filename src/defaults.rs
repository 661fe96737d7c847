//! Default values for reposync configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::PathBuf;

/// Manifest read when `--manifest` is not given.
pub const DEFAULT_MANIFEST: &str = "project.yml";

/// Directory under which working copies live by default.
pub const REPOS_DIR: &str = "repos";

/// Returns the default per-user settings file holding repository credentials.
///
/// This is `~/.reposync/repos.yml`. Falls back to `.reposync/repos.yml` in the
/// current directory if the home directory cannot be determined.
///
/// This can be overridden by the `--settings` CLI flag or the
/// `REPOSYNC_SETTINGS` environment variable.
pub fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".reposync")
        .join("repos.yml")
}

/// Returns the default working copy location for repository `name`.
pub fn default_working_copy(name: &str) -> PathBuf {
    PathBuf::from(REPOS_DIR).join(name)
}
