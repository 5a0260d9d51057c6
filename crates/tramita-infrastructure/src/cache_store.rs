//! File-backed local cache store.
//!
//! Persists each logical key as one JSON file under a base directory, so
//! the cached state survives process restarts. Reads that fail (missing or
//! unreadable files) are logged and reported as absent; writes propagate
//! their failures to the caller.
//!
//! Writes to the same key are serialized through a per-key async lock held
//! across the whole filesystem operation, so interleaved saves of the same
//! key cannot lose updates.

use crate::paths::TramitaPaths;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tramita_core::cache::{keys, CacheStore};
use tramita_core::error::{Result, TramitaError};

/// File-per-key cache store.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── cached_user.json
/// ├── is_authenticated.json
/// └── chat_sessions.json
/// ```
pub struct JsonCacheStore {
    base_dir: PathBuf,
    /// One-shot seeding guard; repeated initialize() calls are no-ops.
    seeded: AtomicBool,
    /// Per-key write locks.
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl JsonCacheStore {
    /// Creates a store rooted at the given directory. No I/O happens until
    /// the first operation.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            seeded: AtomicBool::new(false),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a store at the default location (`~/.config/tramita/cache`).
    pub fn default_location() -> Result<Self> {
        let base_dir = TramitaPaths::cache_dir()
            .map_err(|e| TramitaError::config(format!("Failed to resolve cache dir: {}", e)))?;
        Ok(Self::new(base_dir))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }

    /// Returns the lock guarding writes to `key`, creating it on first use.
    async fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn write_value(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_dir).await?;
        fs::write(self.key_path(key), value).await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for JsonCacheStore {
    async fn initialize(&self) -> Result<()> {
        if self.seeded.load(Ordering::Acquire) {
            return Ok(());
        }

        if self.get(keys::CHAT_SESSIONS).await.is_none() {
            self.set(keys::CHAT_SESSIONS, "[]".to_string()).await?;
        }

        self.seeded.store(true, Ordering::Release);
        Ok(())
    }

    async fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read cache key '{}': {}", key, e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let lock = self.key_lock(key).await;
        let _guard = lock.lock().await;
        self.write_value(key, &value).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        for key in keys {
            let lock = self.key_lock(key).await;
            let _guard = lock.lock().await;
            match fs::remove_file(self.key_path(key)).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
