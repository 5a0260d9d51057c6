//! Organizational sector enumeration.
//!
//! Sectors tag documents, processes, and users with the university unit
//! responsible for them. The remote store persists sectors as fixed
//! lowercase strings; the mapping is an explicit table so the wire format
//! stays bit-exact with the existing schema.

use serde::{Deserialize, Serialize};

/// One of the six organizational units of the university administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Rectory (reitoria)
    #[serde(rename = "reitoria")]
    Reitoria,
    /// Academic secretariat (secretaria)
    #[serde(rename = "secretaria")]
    Secretaria,
    /// Finance (financeiro)
    #[serde(rename = "financeiro")]
    Financeiro,
    /// Human resources (rh)
    #[serde(rename = "rh")]
    RecursosHumanos,
    /// Information technology (ti)
    #[serde(rename = "ti")]
    Tecnologia,
    /// Legal office (juridico)
    #[serde(rename = "juridico")]
    Juridico,
}

impl Sector {
    /// Remote store representation.
    pub fn as_remote_str(&self) -> &'static str {
        match self {
            Self::Reitoria => "reitoria",
            Self::Secretaria => "secretaria",
            Self::Financeiro => "financeiro",
            Self::RecursosHumanos => "rh",
            Self::Tecnologia => "ti",
            Self::Juridico => "juridico",
        }
    }

    /// Maps a remote string onto a sector.
    ///
    /// Unknown values default to `Secretaria`, the general intake unit.
    pub fn from_remote_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "reitoria" => Self::Reitoria,
            "secretaria" => Self::Secretaria,
            "financeiro" => Self::Financeiro,
            "rh" => Self::RecursosHumanos,
            "ti" => Self::Tecnologia,
            "juridico" => Self::Juridico,
            _ => Self::Secretaria,
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reitoria => "Reitoria",
            Self::Secretaria => "Secretaria Acadêmica",
            Self::Financeiro => "Financeiro",
            Self::RecursosHumanos => "Recursos Humanos",
            Self::Tecnologia => "Tecnologia da Informação",
            Self::Juridico => "Jurídico",
        }
    }

    /// All sectors, in display order.
    pub fn all() -> [Sector; 6] {
        [
            Self::Reitoria,
            Self::Secretaria,
            Self::Financeiro,
            Self::RecursosHumanos,
            Self::Tecnologia,
            Self::Juridico,
        ]
    }
}

impl Default for Sector {
    fn default() -> Self {
        Self::Secretaria
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
