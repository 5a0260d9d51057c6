//! Row normalization between the remote schema and the domain models.
//!
//! The remote store predates the current schema: several columns exist
//! under both a canonical and a legacy name, statuses are free-form
//! strings, and step counters were historically stored as text. This
//! module absorbs all of that at the boundary:
//!
//! - Inbound, each local field reads from a fallback chain of remote
//!   column names, first present wins, with a documented default when the
//!   whole chain is absent. A malformed or partial row never fails.
//! - Outbound, every name in a chain is written simultaneously, so rows
//!   stay readable by deployments on either column generation.
//!
//! The chains are declarative tables consumed symmetrically by both
//! directions; the enum mappings are the explicit tables on the domain
//! types.

use serde_json::{Map, Value};
use tramita_core::chat::{ChatMessage, ChatSession, MessageRole};
use tramita_core::document::{Document, DocumentStatus, DocumentType};
use tramita_core::permission::Role;
use tramita_core::process::{Priority, Process, ProcessStatus};
use tramita_core::remote::RemoteUser;
use tramita_core::sector::Sector;
use tramita_core::user::User;

/// Remote column names for one local field, in precedence order.
type FieldChain = &'static [&'static str];

// Documents
const DOC_TITLE: FieldChain = &["title", "name"];
const DOC_SUMMARY: FieldChain = &["summary", "description"];
const DOC_AUTHOR: FieldChain = &["author", "created_by"];
const DOC_CONTENT: FieldChain = &["content", "extracted_text"];
const DOC_FILE_URL: FieldChain = &["file_url", "file_path"];

// Processes
const PROC_TITLE: FieldChain = &["title", "name"];
const PROC_CURRENT_STEP: FieldChain = &["current_step", "step"];
const PROC_TOTAL_STEPS: FieldChain = &["total_steps", "steps"];

// Chat sessions
const SESSION_TITLE: FieldChain = &["title", "name"];

// Users
const USER_NAME: FieldChain = &["name", "full_name"];
const USER_AVATAR: FieldChain = &["avatar_url", "avatar"];

/// Documented defaults for absent fields.
const DEFAULT_TITLE: &str = "Sem título";
const DEFAULT_AUTHOR: &str = "Sistema";

/// Step counter defaults when the field is absent or unparseable.
const DEFAULT_CURRENT_STEP: u32 = 1;
const DEFAULT_TOTAL_STEPS: u32 = 5;

// ============================================================================
// Chain readers and writers
// ============================================================================

/// Returns the first present string value along the chain.
fn first_str(row: &Value, chain: FieldChain) -> Option<String> {
    chain.iter().find_map(|name| {
        row.get(name)
            .and_then(Value::as_str)
            .map(|s| s.to_string())
    })
}

/// Returns the first value along the chain that parses as an unsigned
/// integer, accepting both JSON numbers and numeric strings.
fn first_u32(row: &Value, chain: FieldChain) -> Option<u32> {
    chain.iter().find_map(|name| match row.get(name) {
        Some(Value::Number(n)) => n.as_u64().map(|n| n as u32),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

/// Reads a string array field, skipping non-string entries.
fn str_array(row: &Value, name: &str) -> Vec<String> {
    row.get(name)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Writes `value` to every name in the chain.
fn write_str(obj: &mut Map<String, Value>, chain: FieldChain, value: &str) {
    for name in chain {
        obj.insert(name.to_string(), Value::String(value.to_string()));
    }
}

/// Writes an optional string (or explicit null) to every name in the
/// chain. Upserts are full replacements, so absent values are nulled out.
fn write_opt_str(obj: &mut Map<String, Value>, chain: FieldChain, value: Option<&str>) {
    let json = match value {
        Some(s) => Value::String(s.to_string()),
        None => Value::Null,
    };
    for name in chain {
        obj.insert(name.to_string(), json.clone());
    }
}

/// Writes a number to every name in the chain.
fn write_u32(obj: &mut Map<String, Value>, chain: FieldChain, value: u32) {
    for name in chain {
        obj.insert(name.to_string(), Value::from(value));
    }
}

// ============================================================================
// Documents
// ============================================================================

/// Maps a `documents` row onto the domain model, defaulting every absent
/// or malformed field.
pub fn document_from_row(row: &Value) -> Document {
    Document {
        id: first_str(row, &["id"]).unwrap_or_default(),
        title: first_str(row, DOC_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        doc_type: DocumentType::from_remote_str(&first_str(row, &["type"]).unwrap_or_default()),
        sector: Sector::from_remote_str(&first_str(row, &["sector"]).unwrap_or_default()),
        created_at: first_str(row, &["created_at"]).unwrap_or_default(),
        status: DocumentStatus::from_remote_str(&first_str(row, &["status"]).unwrap_or_default()),
        tags: str_array(row, "tags"),
        summary: Some(first_str(row, DOC_SUMMARY).unwrap_or_default()),
        author: first_str(row, DOC_AUTHOR).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        size: first_str(row, &["size"]).unwrap_or_default(),
        file_url: first_str(row, DOC_FILE_URL),
        content: first_str(row, DOC_CONTENT),
    }
}

/// Maps a document onto its remote row, writing canonical and legacy
/// column names simultaneously.
pub fn document_to_row(document: &Document) -> Value {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::String(document.id.clone()));
    write_str(&mut row, DOC_TITLE, &document.title);
    row.insert(
        "type".to_string(),
        Value::String(document.doc_type.as_remote_str().to_string()),
    );
    row.insert(
        "sector".to_string(),
        Value::String(document.sector.as_remote_str().to_string()),
    );
    row.insert(
        "status".to_string(),
        Value::String(document.status.as_remote_str().to_string()),
    );
    row.insert(
        "created_at".to_string(),
        Value::String(document.created_at.clone()),
    );
    row.insert(
        "tags".to_string(),
        Value::Array(
            document
                .tags
                .iter()
                .map(|t| Value::String(t.clone()))
                .collect(),
        ),
    );
    write_opt_str(&mut row, DOC_SUMMARY, document.summary.as_deref());
    write_str(&mut row, DOC_AUTHOR, &document.author);
    row.insert("size".to_string(), Value::String(document.size.clone()));
    write_opt_str(&mut row, DOC_FILE_URL, document.file_url.as_deref());
    write_opt_str(&mut row, DOC_CONTENT, document.content.as_deref());
    Value::Object(row)
}

// ============================================================================
// Processes
// ============================================================================

/// Maps a `processes` row onto the domain model.
pub fn process_from_row(row: &Value) -> Process {
    Process {
        id: first_str(row, &["id"]).unwrap_or_default(),
        number: first_str(row, &["number"]).unwrap_or_default(),
        title: first_str(row, PROC_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: first_str(row, &["description"]),
        current_step: first_u32(row, PROC_CURRENT_STEP).unwrap_or(DEFAULT_CURRENT_STEP),
        total_steps: first_u32(row, PROC_TOTAL_STEPS).unwrap_or(DEFAULT_TOTAL_STEPS),
        status: ProcessStatus::from_remote_str(&first_str(row, &["status"]).unwrap_or_default()),
        sector: Sector::from_remote_str(&first_str(row, &["sector"]).unwrap_or_default()),
        assignee: first_str(row, &["assignee"]),
        priority: Priority::from_remote_str(&first_str(row, &["priority"]).unwrap_or_default()),
        created_at: first_str(row, &["created_at"]).unwrap_or_default(),
        updated_at: first_str(row, &["updated_at"]).unwrap_or_default(),
    }
}

/// Maps a process onto its remote row.
pub fn process_to_row(process: &Process) -> Value {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::String(process.id.clone()));
    row.insert(
        "number".to_string(),
        Value::String(process.number.clone()),
    );
    write_str(&mut row, PROC_TITLE, &process.title);
    row.insert(
        "description".to_string(),
        match &process.description {
            Some(d) => Value::String(d.clone()),
            None => Value::Null,
        },
    );
    write_u32(&mut row, PROC_CURRENT_STEP, process.current_step);
    write_u32(&mut row, PROC_TOTAL_STEPS, process.total_steps);
    row.insert(
        "status".to_string(),
        Value::String(process.status.as_remote_str().to_string()),
    );
    row.insert(
        "sector".to_string(),
        Value::String(process.sector.as_remote_str().to_string()),
    );
    row.insert(
        "assignee".to_string(),
        match &process.assignee {
            Some(a) => Value::String(a.clone()),
            None => Value::Null,
        },
    );
    row.insert(
        "priority".to_string(),
        Value::String(process.priority.as_remote_str().to_string()),
    );
    row.insert(
        "created_at".to_string(),
        Value::String(process.created_at.clone()),
    );
    row.insert(
        "updated_at".to_string(),
        Value::String(process.updated_at.clone()),
    );
    Value::Object(row)
}

// ============================================================================
// Chat sessions and messages
// ============================================================================

/// Maps a `chat_sessions` row (with embedded `chat_messages`) onto the
/// domain model. Message order is preserved as delivered.
pub fn chat_session_from_row(row: &Value) -> ChatSession {
    let messages = row
        .get("chat_messages")
        .and_then(Value::as_array)
        .map(|rows| rows.iter().map(chat_message_from_row).collect())
        .unwrap_or_default();

    ChatSession {
        id: first_str(row, &["id"]).unwrap_or_default(),
        title: first_str(row, SESSION_TITLE).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        created_at: first_str(row, &["created_at"]).unwrap_or_default(),
        updated_at: first_str(row, &["updated_at"]).unwrap_or_default(),
        messages,
    }
}

/// Maps a session onto its metadata row (messages are mirrored
/// separately).
pub fn chat_session_to_row(user_id: &str, session: &ChatSession) -> Value {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::String(session.id.clone()));
    row.insert("user_id".to_string(), Value::String(user_id.to_string()));
    write_str(&mut row, SESSION_TITLE, &session.title);
    row.insert(
        "created_at".to_string(),
        Value::String(session.created_at.clone()),
    );
    row.insert(
        "updated_at".to_string(),
        Value::String(session.updated_at.clone()),
    );
    Value::Object(row)
}

/// Maps a `chat_messages` row onto the domain model.
pub fn chat_message_from_row(row: &Value) -> ChatMessage {
    ChatMessage {
        id: first_str(row, &["id"]).unwrap_or_default(),
        role: MessageRole::from_remote_str(&first_str(row, &["role"]).unwrap_or_default()),
        content: first_str(row, &["content"]).unwrap_or_default(),
        timestamp: first_str(row, &["timestamp"]).unwrap_or_default(),
    }
}

/// Maps a message onto its remote row.
pub fn chat_message_to_row(session_id: &str, message: &ChatMessage) -> Value {
    let mut row = Map::new();
    row.insert("id".to_string(), Value::String(message.id.clone()));
    row.insert(
        "session_id".to_string(),
        Value::String(session_id.to_string()),
    );
    row.insert(
        "role".to_string(),
        Value::String(message.role.as_remote_str().to_string()),
    );
    row.insert(
        "content".to_string(),
        Value::String(message.content.clone()),
    );
    row.insert(
        "timestamp".to_string(),
        Value::String(message.timestamp.clone()),
    );
    Value::Object(row)
}

// ============================================================================
// Users
// ============================================================================

/// Maps a `users` row onto the authentication record. Unknown roles parse
/// as Viewer (least privilege); a missing hash simply fails verification
/// later.
pub fn user_from_row(row: &Value) -> RemoteUser {
    let role = first_str(row, &["role"])
        .and_then(|s| Role::parse(&s))
        .unwrap_or_default();

    RemoteUser {
        user: User {
            id: first_str(row, &["id"]).unwrap_or_default(),
            name: first_str(row, USER_NAME).unwrap_or_default(),
            email: first_str(row, &["email"]).unwrap_or_default(),
            role,
            sector: Sector::from_remote_str(&first_str(row, &["sector"]).unwrap_or_default()),
            avatar_url: first_str(row, USER_AVATAR),
        },
        password_hash: first_str(row, &["password_hash"]).unwrap_or_default(),
    }
}
