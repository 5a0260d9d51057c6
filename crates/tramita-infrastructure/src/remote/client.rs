//! Remote store client.
//!
//! Talks PostgREST to the backend: filtered selects, upserts keyed by id
//! (`Prefer: resolution=merge-duplicates`), and deletes by equality
//! filter. Every public operation is gated on configuration presence;
//! without usable coordinates reads return empty collections and
//! mutations are logged no-ops, so the caller never sees an
//! "unconfigured backend" error.
//!
//! Transport and query failures follow the same policy: they are logged
//! as warnings and degrade to empty/no-op results. The transport's own
//! timeouts apply; no additional timeout layer is added.

use super::config::RemoteConfig;
use super::rows;
use async_trait::async_trait;
use serde_json::Value;
use tramita_core::chat::ChatSession;
use tramita_core::document::Document;
use tramita_core::process::Process;
use tramita_core::remote::{RemoteStore, RemoteUser};
use tramita_core::sector::Sector;

const DOCUMENTS_TABLE: &str = "documents";
const PROCESSES_TABLE: &str = "processes";
const SESSIONS_TABLE: &str = "chat_sessions";
const MESSAGES_TABLE: &str = "chat_messages";
const USERS_TABLE: &str = "users";

/// PostgREST client for the remote relational store.
#[derive(Clone)]
pub struct SupabaseRemoteStore {
    config: RemoteConfig,
    client: reqwest::Client,
}

impl SupabaseRemoteStore {
    /// Creates a client with the provided coordinates.
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a client from the default configuration chain
    /// (remote.json, then environment, then unconfigured).
    pub fn from_default_config() -> Self {
        Self::new(RemoteConfig::load())
    }

    /// Returns the loaded coordinates.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn rest_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.config.url.trim_end_matches('/'),
            table
        )
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    /// Checks the configuration gate for one operation. Logs a warning and
    /// returns false when the backend is unreachable by design.
    fn gate(&self, operation: &str) -> bool {
        if self.config.is_configured() {
            true
        } else {
            tracing::warn!("Remote store not configured; skipping {}", operation);
            false
        }
    }

    /// Runs a select, degrading every failure to an empty row set.
    async fn select(&self, table: &str, query: &[(&str, &str)]) -> Vec<Value> {
        if !self.gate(&format!("select from {}", table)) {
            return Vec::new();
        }

        let request = self.authed(self.client.get(self.rest_url(table)).query(query));
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Select from {} failed: {}", table, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                "Select from {} returned HTTP {}",
                table,
                response.status().as_u16()
            );
            return Vec::new();
        }

        match response.json::<Vec<Value>>().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!("Select from {} returned unparseable body: {}", table, e);
                Vec::new()
            }
        }
    }

    /// Upserts a batch of rows keyed by id. Failures are logged, never
    /// surfaced.
    async fn upsert(&self, table: &str, batch: Vec<Value>) {
        if batch.is_empty() || !self.gate(&format!("upsert into {}", table)) {
            return;
        }

        let request = self
            .authed(self.client.post(self.rest_url(table)))
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&batch);

        match request.send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    "Upsert into {} returned HTTP {}",
                    table,
                    response.status().as_u16()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Upsert into {} failed: {}", table, e),
        }
    }

    /// Deletes rows matching an equality filter. Failures are logged,
    /// never surfaced.
    async fn delete_where(&self, table: &str, column: &str, value: &str) {
        if !self.gate(&format!("delete from {}", table)) {
            return;
        }

        let filter = format!("eq.{}", value);
        let request = self.authed(
            self.client
                .delete(self.rest_url(table))
                .query(&[(column, filter.as_str())]),
        );

        match request.send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    "Delete from {} returned HTTP {}",
                    table,
                    response.status().as_u16()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Delete from {} failed: {}", table, e),
        }
    }
}

#[async_trait]
impl RemoteStore for SupabaseRemoteStore {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn fetch_documents(&self) -> Vec<Document> {
        self.select(
            DOCUMENTS_TABLE,
            &[("select", "*"), ("order", "created_at.desc")],
        )
        .await
        .iter()
        .map(rows::document_from_row)
        .collect()
    }

    async fn fetch_documents_by_sector(&self, sector: Sector) -> Vec<Document> {
        let filter = format!("eq.{}", sector.as_remote_str());
        self.select(
            DOCUMENTS_TABLE,
            &[
                ("select", "*"),
                ("sector", filter.as_str()),
                ("order", "created_at.desc"),
            ],
        )
        .await
        .iter()
        .map(rows::document_from_row)
        .collect()
    }

    async fn upsert_document(&self, document: &Document) {
        self.upsert(DOCUMENTS_TABLE, vec![rows::document_to_row(document)])
            .await;
    }

    async fn delete_document(&self, id: &str) {
        self.delete_where(DOCUMENTS_TABLE, "id", id).await;
    }

    async fn fetch_processes(&self) -> Vec<Process> {
        self.select(
            PROCESSES_TABLE,
            &[("select", "*"), ("order", "created_at.desc")],
        )
        .await
        .iter()
        .map(rows::process_from_row)
        .collect()
    }

    async fn upsert_process(&self, process: &Process) {
        self.upsert(PROCESSES_TABLE, vec![rows::process_to_row(process)])
            .await;
    }

    async fn delete_process(&self, id: &str) {
        self.delete_where(PROCESSES_TABLE, "id", id).await;
    }

    async fn fetch_chat_sessions(&self, user_id: &str) -> Vec<ChatSession> {
        let filter = format!("eq.{}", user_id);
        self.select(
            SESSIONS_TABLE,
            &[
                ("select", "*,chat_messages(*)"),
                ("user_id", filter.as_str()),
                ("order", "updated_at.desc"),
                ("chat_messages.order", "timestamp.asc"),
            ],
        )
        .await
        .iter()
        .map(rows::chat_session_from_row)
        .collect()
    }

    async fn upsert_chat_session(&self, user_id: &str, session: &ChatSession) {
        self.upsert(
            SESSIONS_TABLE,
            vec![rows::chat_session_to_row(user_id, session)],
        )
        .await;

        let messages = session
            .messages
            .iter()
            .map(|message| rows::chat_message_to_row(&session.id, message))
            .collect();
        self.upsert(MESSAGES_TABLE, messages).await;
    }

    async fn delete_chat_session(&self, id: &str) {
        // Messages first; the schema is not assumed to cascade.
        self.delete_where(MESSAGES_TABLE, "session_id", id).await;
        self.delete_where(SESSIONS_TABLE, "id", id).await;
    }

    async fn find_user_by_email(&self, email: &str) -> Option<RemoteUser> {
        let filter = format!("eq.{}", email);
        let matches = self
            .select(
                USERS_TABLE,
                &[("select", "*"), ("email", filter.as_str()), ("limit", "1")],
            )
            .await;
        matches.first().map(rows::user_from_row)
    }
}

/// Convenience: builds an unconfigured store, useful for offline tests
/// and as the fallback when no coordinates exist.
impl Default for SupabaseRemoteStore {
    fn default() -> Self {
        Self::new(RemoteConfig::unconfigured())
    }
}
