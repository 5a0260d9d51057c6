//! Infrastructure layer for Tramita.
//!
//! Concrete implementations of the core traits: the file-backed local
//! cache store and the PostgREST remote store client, plus path and
//! configuration management.

pub mod cache_store;
pub mod paths;
pub mod remote;

pub use crate::cache_store::JsonCacheStore;
pub use crate::remote::{RemoteConfig, SupabaseRemoteStore};
