//! Remote store configuration.
//!
//! Two connection coordinates: the endpoint URL and the access key.
//! Configuration priority: ~/.config/tramita/remote.json > environment
//! variables. Missing coordinates are not an error; an unconfigured
//! [`RemoteConfig`] puts every remote-touching operation into its
//! documented no-op/empty-result fallback mode.

use crate::paths::TramitaPaths;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Placeholder values shipped in configuration templates. Coordinates
/// equal to these are treated as absent.
pub const PLACEHOLDER_URL: &str = "YOUR_SUPABASE_URL";
pub const PLACEHOLDER_KEY: &str = "YOUR_SUPABASE_KEY";

const ENV_URL: &str = "TRAMITA_REMOTE_URL";
const ENV_KEY: &str = "TRAMITA_REMOTE_KEY";

/// Connection coordinates for the remote store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Endpoint URL (e.g. "https://abc.supabase.co")
    #[serde(default)]
    pub url: String,
    /// Access key sent as `apikey` and bearer token
    #[serde(default)]
    pub anon_key: String,
}

impl RemoteConfig {
    /// Creates a config from explicit coordinates.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
        }
    }

    /// Creates an explicitly unconfigured config (offline mode).
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Whether usable coordinates are present: both values non-empty and
    /// neither equal to its known placeholder.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
            && !self.anon_key.trim().is_empty()
            && self.url != PLACEHOLDER_URL
            && self.anon_key != PLACEHOLDER_KEY
    }

    /// Loads configuration from the default file location, falling back to
    /// environment variables, falling back to unconfigured.
    ///
    /// Never fails: a missing or unparseable file simply yields the next
    /// source in the chain.
    pub fn load() -> Self {
        if let Ok(path) = TramitaPaths::remote_config_file() {
            if let Some(config) = Self::from_file(&path) {
                return config;
            }
        }
        Self::from_env().unwrap_or_default()
    }

    /// Loads configuration from a JSON file. `None` if the file is absent
    /// or does not parse.
    pub fn from_file(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring unparseable remote config {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Loads configuration from `TRAMITA_REMOTE_URL` / `TRAMITA_REMOTE_KEY`.
    pub fn from_env() -> Option<Self> {
        let url = env::var(ENV_URL).ok()?;
        let anon_key = env::var(ENV_KEY).ok()?;
        Some(Self::new(url, anon_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_unconfigured() {
        assert!(!RemoteConfig::default().is_configured());
        assert!(!RemoteConfig::unconfigured().is_configured());
    }

    #[test]
    fn test_placeholders_are_unconfigured() {
        let config = RemoteConfig::new(PLACEHOLDER_URL, "real-key");
        assert!(!config.is_configured());

        let config = RemoteConfig::new("https://abc.supabase.co", PLACEHOLDER_KEY);
        assert!(!config.is_configured());
    }

    #[test]
    fn test_real_coordinates_are_configured() {
        let config = RemoteConfig::new("https://abc.supabase.co", "anon-key-123");
        assert!(config.is_configured());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("remote.json");
        fs::write(
            &path,
            r#"{"url":"https://abc.supabase.co","anon_key":"k-1"}"#,
        )
        .unwrap();

        let config = RemoteConfig::from_file(&path).unwrap();
        assert_eq!(config.url, "https://abc.supabase.co");
        assert_eq!(config.anon_key, "k-1");
    }

    #[test]
    fn test_from_file_missing_or_invalid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(RemoteConfig::from_file(&temp_dir.path().join("missing.json")).is_none());

        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(RemoteConfig::from_file(&path).is_none());
    }
}
