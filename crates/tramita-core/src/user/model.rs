//! User domain model.
//!
//! The authoritative copy of a user lives in the remote store; a snapshot
//! is cached locally after authentication and cleared on logout.

use crate::permission::Role;
use crate::sector::Sector;
use serde::{Deserialize, Serialize};

/// An authenticated user of the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID format)
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Access role
    pub role: Role,
    /// Organizational unit the user belongs to
    pub sector: Sector,
    /// Reference to the avatar image, if set
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_round_trip() {
        let user = User {
            id: "u-1".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@uni.br".to_string(),
            role: Role::Manager,
            sector: Sector::Financeiro,
            avatar_url: None,
        };

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, user);
        // Roles and sectors cross the wire as their fixed lowercase strings.
        assert!(json.contains("\"manager\""));
        assert!(json.contains("\"financeiro\""));
    }
}
