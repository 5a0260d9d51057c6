//! Unified path management for Tramita local state.
//!
//! The cache directory and the remote configuration file live under the
//! platform config directory (`~/.config/tramita/` on Linux/macOS).
//! Everything that touches the filesystem resolves its paths here so the
//! layout stays consistent.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Tramita.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/tramita/           # Config directory
/// ├── remote.json              # Remote store coordinates
/// └── cache/                   # Local cache store (one JSON file per key)
///     ├── cached_user.json
///     ├── is_authenticated.json
///     └── chat_sessions.json
/// ```
pub struct TramitaPaths;

impl TramitaPaths {
    /// Returns the Tramita configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/tramita/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("tramita"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the local cache directory.
    pub fn cache_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("cache"))
    }

    /// Returns the path to the remote configuration file.
    ///
    /// # Security Note
    ///
    /// The file holds the backend access key in plaintext JSON; it should
    /// carry restrictive permissions (e.g. 600).
    pub fn remote_config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("remote.json"))
    }
}
