//! Document domain model.
//!
//! Documents are owned by the remote store; the local layer never caches
//! them. Every read re-fetches, and remote unavailability yields an empty
//! result set rather than an error.

use crate::sector::Sector;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// File format of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
    Xlsx,
}

impl DocumentType {
    /// Remote store representation.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Xlsx => "xlsx",
        }
    }

    /// Maps a remote string onto a document type; unknown values default
    /// to `Pdf`.
    pub fn from_remote_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            "xlsx" => Self::Xlsx,
            _ => Self::Pdf,
        }
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Pdf
    }
}

/// Lifecycle status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    Published,
    Archived,
}

impl DocumentStatus {
    /// Remote store representation.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }

    /// Maps a remote string onto a status; unknown values default to
    /// `Draft`.
    pub fn from_remote_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "draft" => Self::Draft,
            "published" => Self::Published,
            "archived" => Self::Archived,
            _ => Self::Draft,
        }
    }
}

impl Default for DocumentStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// A tracked document in the university archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier (UUID format)
    pub id: String,
    /// Document title
    pub title: String,
    /// File format
    pub doc_type: DocumentType,
    /// Responsible organizational unit
    pub sector: Sector,
    /// Timestamp when the document was created (ISO 8601 format)
    pub created_at: String,
    /// Lifecycle status
    pub status: DocumentStatus,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary, if one was written
    pub summary: Option<String>,
    /// Author display name
    pub author: String,
    /// Human-readable size descriptor (e.g. "1.2 MB")
    pub size: String,
    /// Reference to the stored file, if uploaded
    pub file_url: Option<String>,
    /// Extracted text content, if available
    pub content: Option<String>,
}

impl Document {
    /// Creates a new draft document with a generated id and the current
    /// timestamp.
    pub fn new(title: impl Into<String>, doc_type: DocumentType, sector: Sector) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            doc_type,
            sector,
            created_at: Utc::now().to_rfc3339(),
            status: DocumentStatus::Draft,
            tags: Vec::new(),
            summary: None,
            author: "Sistema".to_string(),
            size: String::new(),
            file_url: None,
            content: None,
        }
    }
}
