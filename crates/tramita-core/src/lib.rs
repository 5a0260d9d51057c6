//! Domain layer for Tramita.
//!
//! Holds the domain models, the fixed enumerations with their explicit
//! remote-string tables, the shared error type, the permission table, and
//! the traits that form the seams between the application services and the
//! infrastructure layer.

pub mod cache;
pub mod chat;
pub mod document;
pub mod error;
pub mod permission;
pub mod process;
pub mod remote;
pub mod sector;
pub mod user;

// Re-export common error type
pub use error::{Result, TramitaError};

pub use cache::CacheStore;
pub use chat::{ChatMessage, ChatSession, MessageRole};
pub use document::{Document, DocumentStatus, DocumentType};
pub use permission::{has_permission, Capability, Role};
pub use process::{Priority, Process, ProcessStatus, ProcessSummary};
pub use remote::{RemoteStore, RemoteUser};
pub use sector::Sector;
pub use user::User;
