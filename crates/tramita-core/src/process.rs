//! Administrative process domain model.
//!
//! Processes are owned by the remote store and move through a fixed set of
//! lifecycle statuses. The local and remote status enumerations are not
//! isomorphic: the remote schema additionally uses `approved`, which maps
//! onto `Completed` inbound. The mapping is an explicit two-way table, not
//! a computed transform.

use crate::sector::Sector;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl ProcessStatus {
    /// Remote store representation.
    ///
    /// `Completed` always writes `completed`; the remote-only `approved`
    /// value is accepted inbound but never produced outbound, making
    /// `approved` → `Completed` → `completed` the single lossy round trip.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }

    /// Maps a remote string onto a status.
    ///
    /// `approved` only ever maps to `Completed`. Values outside the known
    /// set default to `Pending`.
    pub fn from_remote_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "approved" => Self::Completed,
            "rejected" => Self::Rejected,
            _ => Self::Pending,
        }
    }
}

impl Default for ProcessStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Priority of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Remote store representation.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Maps a remote string onto a priority; unknown values default to
    /// `Medium`.
    pub fn from_remote_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// An administrative process moving through tracked steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (UUID format)
    pub id: String,
    /// Human-readable process number (e.g. "2026/0142")
    pub number: String,
    /// Process title
    pub title: String,
    /// Optional description of the request
    pub description: Option<String>,
    /// Current step index (1-based)
    pub current_step: u32,
    /// Total number of steps
    pub total_steps: u32,
    /// Lifecycle status
    pub status: ProcessStatus,
    /// Responsible organizational unit
    pub sector: Sector,
    /// Display name of the current assignee, if any
    pub assignee: Option<String>,
    /// Priority
    pub priority: Priority,
    /// Timestamp when the process was created (ISO 8601 format)
    pub created_at: String,
    /// Timestamp when the process was last updated (ISO 8601 format)
    pub updated_at: String,
}

impl Process {
    /// Creates a new pending process with a generated id and the current
    /// timestamps.
    pub fn new(number: impl Into<String>, title: impl Into<String>, sector: Sector) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            number: number.into(),
            title: title.into(),
            description: None,
            current_step: 1,
            total_steps: 5,
            status: ProcessStatus::Pending,
            sector,
            assignee: None,
            priority: Priority::Medium,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Counts of processes per lifecycle status, for report views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub rejected: usize,
}

impl ProcessSummary {
    /// Total number of counted processes.
    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.completed + self.rejected
    }
}
