//! Chat session domain models.

pub mod message;
pub mod model;

pub use message::{ChatMessage, MessageRole};
pub use model::ChatSession;
