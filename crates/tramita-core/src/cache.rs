//! Local cache store trait.
//!
//! Defines the interface for the small persisted key-value store that
//! backs offline-first behavior. Values are opaque serialized JSON blobs;
//! the store itself does not interpret them.

use crate::error::Result;
use async_trait::async_trait;

/// The fixed logical keys of the local cache.
pub mod keys {
    /// Serialized [`crate::user::User`] snapshot of the signed-in user.
    pub const CACHED_USER: &str = "cached_user";
    /// Authentication flag, stored as the string `"true"`.
    pub const IS_AUTHENTICATED: &str = "is_authenticated";
    /// Serialized list of [`crate::chat::ChatSession`].
    pub const CHAT_SESSIONS: &str = "chat_sessions";
}

/// An abstract persisted key-value store for small JSON blobs.
///
/// This trait decouples the application services from the concrete storage
/// mechanism and allows mock substitution in tests.
///
/// # Failure policy
///
/// Read failures (missing or unreadable entries) are absorbed by the
/// implementation: they are logged and reported as absent, never as
/// errors. Explicit mutations (`set`, `remove`) propagate their failures
/// to the caller.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Seeds default values exactly once per process lifetime.
    ///
    /// The chat-session key is initialized with an empty list if absent.
    /// Repeated calls are cheap no-ops guarded by an in-memory flag.
    async fn initialize(&self) -> Result<()>;

    /// Returns the blob stored under `key`, or `None` if absent or
    /// unreadable.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous blob.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Value persisted
    /// - `Err(_)`: Persistence failed; the caller must see this
    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes the given keys as one atomic-intent operation.
    ///
    /// Keys that are already absent are skipped silently. The underlying
    /// primitive does not guarantee atomicity across keys; callers treat
    /// the group as a single logical clear.
    async fn remove(&self, keys: &[&str]) -> Result<()>;
}
