//! Chat session domain model.
//!
//! Sessions are dual-owned: the remote copy is authoritative when a user is
//! recognized and the backend is reachable, but a local copy always exists
//! as a fallback and is the system of record while offline.

use super::message::ChatMessage;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conversation between the user and the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Human-readable session title
    pub title: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the session was last updated (ISO 8601 format)
    pub updated_at: String,
    /// Messages in insertion order
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates an empty session with a generated id and the current
    /// timestamps.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            created_at: now.clone(),
            updated_at: now,
            messages: Vec::new(),
        }
    }

    /// Appends a message and refreshes the updated-at timestamp.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.updated_at = Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::MessageRole;

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new("Dúvidas sobre matrícula");
        assert!(session.messages.is_empty());
        assert_eq!(session.created_at, session.updated_at);
    }

    #[test]
    fn test_push_message_preserves_order() {
        let mut session = ChatSession::new("Teste");
        session.push_message(ChatMessage::user("primeira"));
        session.push_message(ChatMessage::assistant("segunda"));
        assert_eq!(session.messages.len(), 2);
        assert_eq!(session.messages[0].role, MessageRole::User);
        assert_eq!(session.messages[1].content, "segunda");
    }
}
