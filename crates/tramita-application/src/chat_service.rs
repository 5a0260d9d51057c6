//! Chat session service: merge engine and assistant entry point.
//!
//! Sessions are dual-owned. Reads prefer the remote copy when the backend
//! is configured and a user is recognized — a successful non-empty remote
//! fetch wins entirely, with no field-level merge. Otherwise the local
//! cache is returned verbatim.
//!
//! Saves are local-first: the cache write must succeed (or its failure
//! propagates) before a best-effort mirror to the remote store is
//! attempted, so the local copy is never behind what the UI just
//! displayed. This is an explicit last-writer-wins, remote-preferred
//! policy; two devices writing concurrently diverge silently until one
//! reaches the remote store.

use crate::auth_service::read_cached_user;
use crate::responder;
use std::sync::Arc;
use tramita_core::cache::{keys, CacheStore};
use tramita_core::chat::ChatSession;
use tramita_core::document::Document;
use tramita_core::error::Result;
use tramita_core::remote::RemoteStore;

/// Chat session persistence and the rule-based assistant.
///
/// Constructed once at process start with the injected cache and remote
/// store.
pub struct ChatService {
    cache: Arc<dyn CacheStore>,
    remote: Arc<dyn RemoteStore>,
}

impl ChatService {
    /// Creates a new ChatService.
    pub fn new(cache: Arc<dyn CacheStore>, remote: Arc<dyn RemoteStore>) -> Self {
        Self { cache, remote }
    }

    /// The authoritative session list for the current user.
    ///
    /// Remote wins when it is reachable, a user is cached, and the fetch
    /// returns at least one session; the local cache is the fallback in
    /// every other case.
    pub async fn chat_sessions(&self) -> Vec<ChatSession> {
        if let Err(e) = self.cache.initialize().await {
            tracing::warn!("Chat cache initialization failed: {}", e);
        }

        if self.remote.is_configured() {
            if let Some(user) = read_cached_user(self.cache.as_ref()).await {
                let remote_sessions = self.remote.fetch_chat_sessions(&user.id).await;
                if !remote_sessions.is_empty() {
                    return remote_sessions;
                }
            }
        }

        self.local_sessions().await
    }

    /// Saves a session locally (replace-by-id if present, else prepend),
    /// then mirrors it to the remote store best-effort.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The local write succeeded; mirror state is not reported
    /// - `Err(_)`: The local write failed
    pub async fn save_chat_session(&self, session: &ChatSession) -> Result<()> {
        self.cache.initialize().await?;

        let mut sessions = self.local_sessions().await;
        if let Some(slot) = sessions.iter_mut().find(|s| s.id == session.id) {
            *slot = session.clone();
        } else {
            sessions.insert(0, session.clone());
        }
        self.cache
            .set(keys::CHAT_SESSIONS, serde_json::to_string(&sessions)?)
            .await?;

        if self.remote.is_configured() {
            if let Some(user) = read_cached_user(self.cache.as_ref()).await {
                // Mirror failures are absorbed by the client; the local
                // write above already succeeded.
                self.remote.upsert_chat_session(&user.id, session).await;
            }
        }

        Ok(())
    }

    /// Deletes a session locally, then from the remote store best-effort.
    pub async fn delete_chat_session(&self, id: &str) -> Result<()> {
        self.cache.initialize().await?;

        let mut sessions = self.local_sessions().await;
        sessions.retain(|s| s.id != id);
        self.cache
            .set(keys::CHAT_SESSIONS, serde_json::to_string(&sessions)?)
            .await?;

        if self.remote.is_configured() {
            self.remote.delete_chat_session(id).await;
        }

        Ok(())
    }

    /// Produces the assistant's reply for a user utterance, optionally
    /// parameterized by the documents currently in context.
    pub fn respond(&self, utterance: &str, context: &[Document]) -> String {
        responder::respond(utterance, context)
    }

    /// Reads the locally cached session list. An unreadable blob is
    /// logged and treated as empty.
    async fn local_sessions(&self) -> Vec<ChatSession> {
        let Some(blob) = self.cache.get(keys::CHAT_SESSIONS).await else {
            return Vec::new();
        };
        match serde_json::from_str::<Vec<ChatSession>>(&blob) {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!("Cached chat sessions are unreadable: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryCacheStore, StubRemoteStore};
    use tramita_core::chat::ChatMessage;
    use tramita_core::permission::Role;
    use tramita_core::sector::Sector;
    use tramita_core::user::User;

    fn cached_user_blob() -> String {
        serde_json::to_string(&User {
            id: "u-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@uni.br".to_string(),
            role: Role::Officer,
            sector: Sector::Secretaria,
            avatar_url: None,
        })
        .unwrap()
    }

    async fn cache_with_user() -> Arc<MemoryCacheStore> {
        let cache = Arc::new(MemoryCacheStore::new());
        cache
            .set(keys::CACHED_USER, cached_user_blob())
            .await
            .unwrap();
        cache
    }

    #[tokio::test]
    async fn test_remote_wins_when_available() {
        let cache = cache_with_user().await;
        let remote_session = ChatSession::new("Remota");
        let remote = StubRemoteStore::configured().with_session(remote_session.clone());
        let service = ChatService::new(cache.clone(), Arc::new(remote));

        // A diverging local copy exists, but the remote list wins entirely.
        cache
            .set(
                keys::CHAT_SESSIONS,
                serde_json::to_string(&[ChatSession::new("Local")]).unwrap(),
            )
            .await
            .unwrap();

        let sessions = service.chat_sessions().await;
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].id, remote_session.id);
    }

    #[tokio::test]
    async fn test_unconfigured_returns_local_verbatim() {
        let cache = cache_with_user().await;
        let local = vec![ChatSession::new("Primeira"), ChatSession::new("Segunda")];
        cache
            .set(keys::CHAT_SESSIONS, serde_json::to_string(&local).unwrap())
            .await
            .unwrap();

        let service = ChatService::new(cache, Arc::new(StubRemoteStore::unconfigured()));
        let sessions = service.chat_sessions().await;
        assert_eq!(sessions, local);
    }

    #[tokio::test]
    async fn test_empty_remote_falls_back_to_local() {
        let cache = cache_with_user().await;
        let local = vec![ChatSession::new("Local")];
        cache
            .set(keys::CHAT_SESSIONS, serde_json::to_string(&local).unwrap())
            .await
            .unwrap();

        let service = ChatService::new(cache, Arc::new(StubRemoteStore::configured()));
        let sessions = service.chat_sessions().await;
        assert_eq!(sessions, local);
    }

    #[tokio::test]
    async fn test_no_cached_user_skips_remote() {
        let cache = Arc::new(MemoryCacheStore::new());
        let remote = StubRemoteStore::configured().with_session(ChatSession::new("Remota"));
        let service = ChatService::new(cache, Arc::new(remote));

        // Without a recognized user the remote copy is not consulted.
        let sessions = service.chat_sessions().await;
        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_save_prepends_new_session() {
        let cache = Arc::new(MemoryCacheStore::new());
        let service = ChatService::new(cache, Arc::new(StubRemoteStore::unconfigured()));

        let first = ChatSession::new("Primeira");
        let second = ChatSession::new("Segunda");
        service.save_chat_session(&first).await.unwrap();
        service.save_chat_session(&second).await.unwrap();

        let sessions = service.chat_sessions().await;
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].id, second.id);
        assert_eq!(sessions[1].id, first.id);
    }

    #[tokio::test]
    async fn test_save_replaces_by_id_without_reordering() {
        let cache = Arc::new(MemoryCacheStore::new());
        let service = ChatService::new(cache, Arc::new(StubRemoteStore::unconfigured()));

        let mut first = ChatSession::new("Primeira");
        let second = ChatSession::new("Segunda");
        service.save_chat_session(&first).await.unwrap();
        service.save_chat_session(&second).await.unwrap();

        first.push_message(ChatMessage::user("novidade"));
        service.save_chat_session(&first).await.unwrap();

        let sessions = service.chat_sessions().await;
        assert_eq!(sessions.len(), 2);
        // In-place replacement keeps the existing position.
        assert_eq!(sessions[0].id, second.id);
        assert_eq!(sessions[1].id, first.id);
        assert_eq!(sessions[1].messages.len(), 1);
    }

    #[tokio::test]
    async fn test_save_mirrors_to_remote_when_signed_in() {
        let cache = cache_with_user().await;
        let remote = Arc::new(StubRemoteStore::configured());
        let service = ChatService::new(cache, remote.clone());

        let session = ChatSession::new("Espelhada");
        service.save_chat_session(&session).await.unwrap();

        let mirrored = remote.mirrored_sessions();
        assert_eq!(mirrored.len(), 1);
        assert_eq!(mirrored[0].0, "u-1");
        assert_eq!(mirrored[0].1.id, session.id);
    }

    #[tokio::test]
    async fn test_delete_removes_locally() {
        let cache = Arc::new(MemoryCacheStore::new());
        let service = ChatService::new(cache, Arc::new(StubRemoteStore::unconfigured()));

        let session = ChatSession::new("Descartável");
        service.save_chat_session(&session).await.unwrap();
        service.delete_chat_session(&session.id).await.unwrap();

        assert!(service.chat_sessions().await.is_empty());
    }
}
