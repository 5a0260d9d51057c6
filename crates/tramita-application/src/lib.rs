//! Application layer for Tramita.
//!
//! This crate provides the services the UI layer consumes: document and
//! process access, authentication, chat session reconciliation, and the
//! rule-based assistant. Services are constructed once at process start
//! with their dependencies injected, making substitution in tests
//! straightforward.

pub mod auth_service;
pub mod chat_service;
pub mod data_service;
pub mod responder;

#[cfg(test)]
mod test_support;

pub use auth_service::AuthService;
pub use chat_service::ChatService;
pub use data_service::DataService;
