//! In-memory trait implementations shared by the service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tramita_core::cache::{keys, CacheStore};
use tramita_core::chat::ChatSession;
use tramita_core::document::Document;
use tramita_core::error::Result;
use tramita_core::process::Process;
use tramita_core::remote::{RemoteStore, RemoteUser};
use tramita_core::sector::Sector;

/// In-memory cache store.
pub struct MemoryCacheStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn initialize(&self) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        data.entry(keys::CHAT_SESSIONS.to_string())
            .or_insert_with(|| "[]".to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Option<String> {
        self.data.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.data.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, keys: &[&str]) -> Result<()> {
        let mut data = self.data.lock().unwrap();
        for key in keys {
            data.remove(*key);
        }
        Ok(())
    }
}

/// In-memory remote store honoring the configuration gate: while
/// unconfigured, reads are empty and mutations are no-ops, like the real
/// client.
pub struct StubRemoteStore {
    configured: bool,
    users: Mutex<Vec<RemoteUser>>,
    documents: Mutex<Vec<Document>>,
    processes: Mutex<Vec<Process>>,
    sessions: Mutex<Vec<ChatSession>>,
    mirrored: Mutex<Vec<(String, ChatSession)>>,
}

impl StubRemoteStore {
    pub fn configured() -> Self {
        Self::new(true)
    }

    pub fn unconfigured() -> Self {
        Self::new(false)
    }

    fn new(configured: bool) -> Self {
        Self {
            configured,
            users: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
            processes: Mutex::new(Vec::new()),
            sessions: Mutex::new(Vec::new()),
            mirrored: Mutex::new(Vec::new()),
        }
    }

    pub fn with_user(self, user: RemoteUser) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    pub fn with_session(self, session: ChatSession) -> Self {
        self.sessions.lock().unwrap().push(session);
        self
    }

    /// Sessions mirrored through `upsert_chat_session`, with the user id
    /// each mirror was attributed to.
    pub fn mirrored_sessions(&self) -> Vec<(String, ChatSession)> {
        self.mirrored.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteStore for StubRemoteStore {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn fetch_documents(&self) -> Vec<Document> {
        if !self.configured {
            return Vec::new();
        }
        self.documents.lock().unwrap().clone()
    }

    async fn fetch_documents_by_sector(&self, sector: Sector) -> Vec<Document> {
        if !self.configured {
            return Vec::new();
        }
        self.documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.sector == sector)
            .cloned()
            .collect()
    }

    async fn upsert_document(&self, document: &Document) {
        if !self.configured {
            return;
        }
        let mut documents = self.documents.lock().unwrap();
        if let Some(slot) = documents.iter_mut().find(|d| d.id == document.id) {
            *slot = document.clone();
        } else {
            documents.push(document.clone());
        }
    }

    async fn delete_document(&self, id: &str) {
        if !self.configured {
            return;
        }
        self.documents.lock().unwrap().retain(|d| d.id != id);
    }

    async fn fetch_processes(&self) -> Vec<Process> {
        if !self.configured {
            return Vec::new();
        }
        self.processes.lock().unwrap().clone()
    }

    async fn upsert_process(&self, process: &Process) {
        if !self.configured {
            return;
        }
        let mut processes = self.processes.lock().unwrap();
        if let Some(slot) = processes.iter_mut().find(|p| p.id == process.id) {
            *slot = process.clone();
        } else {
            processes.push(process.clone());
        }
    }

    async fn delete_process(&self, id: &str) {
        if !self.configured {
            return;
        }
        self.processes.lock().unwrap().retain(|p| p.id != id);
    }

    async fn fetch_chat_sessions(&self, _user_id: &str) -> Vec<ChatSession> {
        if !self.configured {
            return Vec::new();
        }
        self.sessions.lock().unwrap().clone()
    }

    async fn upsert_chat_session(&self, user_id: &str, session: &ChatSession) {
        if !self.configured {
            return;
        }
        self.mirrored
            .lock()
            .unwrap()
            .push((user_id.to_string(), session.clone()));
    }

    async fn delete_chat_session(&self, id: &str) {
        if !self.configured {
            return;
        }
        self.sessions.lock().unwrap().retain(|s| s.id != id);
    }

    async fn find_user_by_email(&self, email: &str) -> Option<RemoteUser> {
        if !self.configured {
            return None;
        }
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.user.email == email)
            .cloned()
    }
}
