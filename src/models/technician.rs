//! Roster models: technicians, ships and locations.

use serde::{Deserialize, Serialize};

/// A technician on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technician {
    /// Roster id, referenced by [`ReportTechnician::id`](super::ReportTechnician).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Inactive technicians are never synthesized as `Assente`.
    pub active: bool,
    /// Identity in the technician app; matches [`Report::user_id`](super::Report).
    pub user_id: String,
    /// Trade category (e.g. "Elettricista").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A ship reports can be filed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Unique identifier.
    pub id: String,
    /// Ship name.
    pub name: String,
    /// Inactive ships are not offered to the technician app.
    pub active: bool,
}

/// A port or site reports can be filed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: String,
    /// Location name.
    pub name: String,
    /// Inactive locations are not offered to the technician app.
    pub active: bool,
}
