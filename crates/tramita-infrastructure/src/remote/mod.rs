//! Remote store access: configuration, the PostgREST client, row
//! normalization, and credential verification.

pub mod client;
pub mod config;
pub mod password;
pub mod rows;

pub use client::SupabaseRemoteStore;
pub use config::RemoteConfig;
