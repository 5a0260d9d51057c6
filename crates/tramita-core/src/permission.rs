//! Role-based capability resolution.
//!
//! Permissions are a pure function of the role: a fixed table of four roles
//! crossed with a fixed set of named capabilities. Changing the business
//! rules is a data change to this table, not a code change elsewhere.
//!
//! The string-level [`has_permission`] lookup answers `false` for any
//! unrecognized role or capability and never fails.

use serde::{Deserialize, Serialize};

/// Access role of a user, from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access, including user management.
    Admin,
    /// Sector management: documents, process decisions, reports.
    Manager,
    /// Day-to-day clerical work: drafting documents, opening processes.
    Officer,
    /// Read-only access plus the assistant.
    Viewer,
}

impl Role {
    /// Remote store representation.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Officer => "officer",
            Self::Viewer => "viewer",
        }
    }

    /// Parses a remote string into a role. Returns `None` for unknown
    /// values; callers deserializing a user row fall back to `Viewer`
    /// (least privilege).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "manager" => Some(Self::Manager),
            "officer" => Some(Self::Officer),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Whether this role grants the given capability.
    ///
    /// This is the authoritative grant table.
    pub fn allows(&self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Self::Admin => true,
            Self::Manager => !matches!(capability, ManageUsers),
            Self::Officer => matches!(
                capability,
                CreateDocument
                    | EditDocument
                    | CreateProcess
                    | ViewReports
                    | AccessSettings
                    | AccessChat
            ),
            Self::Viewer => matches!(capability, AccessSettings | AccessChat),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Viewer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_remote_str())
    }
}

/// A named capability a role may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    CreateDocument,
    EditDocument,
    DeleteDocument,
    PublishDocument,
    CreateProcess,
    ApproveProcess,
    RejectProcess,
    ViewReports,
    ExportReports,
    ManageUsers,
    AccessSettings,
    AccessChat,
}

impl Capability {
    /// Parses a capability name as used by the UI layer.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "create_document" => Some(Self::CreateDocument),
            "edit_document" => Some(Self::EditDocument),
            "delete_document" => Some(Self::DeleteDocument),
            "publish_document" => Some(Self::PublishDocument),
            "create_process" => Some(Self::CreateProcess),
            "approve_process" => Some(Self::ApproveProcess),
            "reject_process" => Some(Self::RejectProcess),
            "view_reports" => Some(Self::ViewReports),
            "export_reports" => Some(Self::ExportReports),
            "manage_users" => Some(Self::ManageUsers),
            "access_settings" => Some(Self::AccessSettings),
            "access_chat" => Some(Self::AccessChat),
            _ => None,
        }
    }

    /// All capabilities, in table order.
    pub fn all() -> [Capability; 12] {
        use Capability::*;
        [
            CreateDocument,
            EditDocument,
            DeleteDocument,
            PublishDocument,
            CreateProcess,
            ApproveProcess,
            RejectProcess,
            ViewReports,
            ExportReports,
            ManageUsers,
            AccessSettings,
            AccessChat,
        ]
    }
}

/// String-level permission lookup for the UI layer.
///
/// Unrecognized role or capability names yield `false`; this function
/// never fails.
pub fn has_permission(role: &str, capability: &str) -> bool {
    match (Role::parse(role), Capability::parse(capability)) {
        (Some(role), Some(capability)) => role.allows(capability),
        _ => false,
    }
}
