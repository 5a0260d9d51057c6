//! Remote store trait.
//!
//! Defines the interface for the remote relational backend holding
//! documents, processes, chat sessions and users.
//!
//! # Failure policy
//!
//! Remote failures never surface to callers as errors: reads degrade to
//! empty collections (or `None`), mutations degrade to logged no-ops.
//! An unconfigured backend behaves the same way. This keeps the UI layer
//! free of "backend unavailable" special cases.

use crate::chat::ChatSession;
use crate::document::Document;
use crate::process::Process;
use crate::sector::Sector;
use crate::user::User;
use async_trait::async_trait;

/// A user row fetched for authentication: the public profile plus the
/// stored password hash the caller verifies against.
#[derive(Debug, Clone)]
pub struct RemoteUser {
    pub user: User,
    pub password_hash: String,
}

/// An abstract remote relational store.
///
/// Implementations gate every operation on configuration presence and
/// absorb transport failures per the module failure policy.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Whether usable connection coordinates are present.
    fn is_configured(&self) -> bool;

    /// Fetches all documents, newest first. Empty when unconfigured or on
    /// failure.
    async fn fetch_documents(&self) -> Vec<Document>;

    /// Fetches the documents of one sector, newest first.
    async fn fetch_documents_by_sector(&self, sector: Sector) -> Vec<Document>;

    /// Inserts or fully replaces a document by id.
    async fn upsert_document(&self, document: &Document);

    /// Deletes a document by id.
    async fn delete_document(&self, id: &str);

    /// Fetches all processes, newest first. Empty when unconfigured or on
    /// failure.
    async fn fetch_processes(&self) -> Vec<Process>;

    /// Inserts or fully replaces a process by id.
    async fn upsert_process(&self, process: &Process);

    /// Deletes a process by id.
    async fn delete_process(&self, id: &str);

    /// Fetches the chat sessions of a user with their messages in order,
    /// most recently updated first.
    async fn fetch_chat_sessions(&self, user_id: &str) -> Vec<ChatSession>;

    /// Mirrors a chat session: upserts the session row, then the full
    /// message list.
    async fn upsert_chat_session(&self, user_id: &str, session: &ChatSession);

    /// Deletes a chat session (and its messages) by id.
    async fn delete_chat_session(&self, id: &str);

    /// Looks up a user row by email for authentication. `None` when the
    /// user is unknown, the backend is unconfigured, or the query failed.
    async fn find_user_by_email(&self, email: &str) -> Option<RemoteUser>;
}
