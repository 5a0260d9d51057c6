//! Authentication service.
//!
//! Logs the user in against the remote `users` table, caches the snapshot
//! locally, and clears everything on logout. Authentication failures —
//! unknown email, wrong password, query error, unconfigured backend —
//! all surface as an absent user, never as an error, so the UI renders a
//! single "invalid credentials" message regardless of the cause.

use std::sync::Arc;
use tramita_core::cache::{keys, CacheStore};
use tramita_core::error::Result;
use tramita_core::remote::RemoteStore;
use tramita_core::user::User;
use tramita_infrastructure::remote::password;

/// Reads and deserializes the cached user snapshot. An unparseable blob
/// is logged and treated as absent.
pub(crate) async fn read_cached_user(cache: &dyn CacheStore) -> Option<User> {
    let blob = cache.get(keys::CACHED_USER).await?;
    match serde_json::from_str::<User>(&blob) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Cached user snapshot is unreadable: {}", e);
            None
        }
    }
}

/// Login, session snapshot, and logout.
///
/// Constructed once at process start with the injected cache and remote
/// store, and passed to callers.
pub struct AuthService {
    cache: Arc<dyn CacheStore>,
    remote: Arc<dyn RemoteStore>,
}

impl AuthService {
    /// Creates a new AuthService.
    pub fn new(cache: Arc<dyn CacheStore>, remote: Arc<dyn RemoteStore>) -> Self {
        Self { cache, remote }
    }

    /// Attempts to sign in with an email/password pair.
    ///
    /// The user row is fetched by email and the password is verified
    /// locally against the stored salted hash. On success the snapshot
    /// and the authenticated flag are cached; a failed attempt mutates
    /// nothing.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: Credentials accepted
    /// - `Ok(None)`: Credentials rejected (any cause)
    /// - `Err(_)`: The local cache write failed after acceptance
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(record) = self.remote.find_user_by_email(email).await else {
            return Ok(None);
        };

        if !password::verify_password(password, &record.password_hash) {
            tracing::debug!("Login rejected: password verification failed");
            return Ok(None);
        }

        let user = record.user;
        self.cache
            .set(keys::CACHED_USER, serde_json::to_string(&user)?)
            .await?;
        self.cache
            .set(keys::IS_AUTHENTICATED, "true".to_string())
            .await?;

        Ok(Some(user))
    }

    /// Returns the cached user snapshot, if one is signed in.
    pub async fn current_user(&self) -> Option<User> {
        read_cached_user(self.cache.as_ref()).await
    }

    /// Whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.cache
            .get(keys::IS_AUTHENTICATED)
            .await
            .map(|flag| flag == "true")
            .unwrap_or(false)
    }

    /// Signs out: clears the user snapshot, the authenticated flag and
    /// the chat cache together as one logical operation.
    pub async fn logout(&self) -> Result<()> {
        self.cache
            .remove(&[
                keys::CACHED_USER,
                keys::IS_AUTHENTICATED,
                keys::CHAT_SESSIONS,
            ])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryCacheStore, StubRemoteStore};
    use tramita_core::permission::Role;
    use tramita_core::remote::RemoteUser;
    use tramita_core::sector::Sector;

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@uni.br".to_string(),
            role: Role::Officer,
            sector: Sector::Secretaria,
            avatar_url: None,
        }
    }

    fn service_with_user(password: &str) -> (AuthService, Arc<MemoryCacheStore>) {
        let cache = Arc::new(MemoryCacheStore::new());
        let remote = StubRemoteStore::configured().with_user(RemoteUser {
            user: test_user(),
            password_hash: password::hash_password(password),
        });
        let service = AuthService::new(cache.clone(), Arc::new(remote));
        (service, cache)
    }

    #[tokio::test]
    async fn test_login_success_caches_user_and_flag() {
        let (service, cache) = service_with_user("segredo");

        let user = service.login("ana@uni.br", "segredo").await.unwrap();
        assert_eq!(user.unwrap().id, "u-1");

        assert!(service.is_authenticated().await);
        assert_eq!(service.current_user().await.unwrap().email, "ana@uni.br");
        assert!(cache.get(keys::CACHED_USER).await.is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password_mutates_nothing() {
        let (service, cache) = service_with_user("segredo");

        let user = service.login("ana@uni.br", "errada").await.unwrap();
        assert!(user.is_none());

        assert!(!service.is_authenticated().await);
        assert!(cache.get(keys::CACHED_USER).await.is_none());
        assert!(cache.get(keys::IS_AUTHENTICATED).await.is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_none() {
        let (service, _cache) = service_with_user("segredo");
        let user = service.login("outro@uni.br", "segredo").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_login_unconfigured_backend_is_none() {
        let cache = Arc::new(MemoryCacheStore::new());
        let remote = StubRemoteStore::unconfigured().with_user(RemoteUser {
            user: test_user(),
            password_hash: password::hash_password("segredo"),
        });
        let service = AuthService::new(cache, Arc::new(remote));

        let user = service.login("ana@uni.br", "segredo").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session_state() {
        let (service, cache) = service_with_user("segredo");
        service.login("ana@uni.br", "segredo").await.unwrap();
        cache
            .set(keys::CHAT_SESSIONS, "[]".to_string())
            .await
            .unwrap();

        service.logout().await.unwrap();

        assert!(!service.is_authenticated().await);
        assert!(service.current_user().await.is_none());
        assert!(cache.get(keys::CHAT_SESSIONS).await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_cached_user_is_absent() {
        let cache = Arc::new(MemoryCacheStore::new());
        cache
            .set(keys::CACHED_USER, "{ not json".to_string())
            .await
            .unwrap();
        let service = AuthService::new(cache, Arc::new(StubRemoteStore::unconfigured()));

        assert!(service.current_user().await.is_none());
    }
}
