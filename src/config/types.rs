//! Configuration types for the dashboard.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from `settings.yaml`. Roster entries keep the technician
//! app's camelCase field names.

use serde::{Deserialize, Serialize};

use crate::models::{Location, Notification, Ship, Technician};

/// How [`ReportStore::import_reports`](crate::store::ReportStore::import_reports)
/// resolves an incoming report whose id already exists locally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictResolution {
    /// The local report is kept unchanged.
    #[default]
    MasterWins,
    /// The incoming report replaces the local one and its version is bumped.
    TechnicianWins,
    /// The newer report wins, by version and then by modification time.
    Manual,
}

/// Synchronisation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSettings {
    /// Whether a sync payload may be built at all.
    #[serde(default)]
    pub enabled: bool,
    /// Endpoint of the sync server.
    #[serde(default)]
    pub url: String,
    /// Sync automatically after changes.
    #[serde(default)]
    pub auto_sync: bool,
    /// Policy for id collisions on import.
    #[serde(default)]
    pub conflict_resolution: ConflictResolution,
    /// RFC 3339 time of the last completed sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync_at: Option<String>,
}

/// Dashboard settings: company identity, roster, ships, locations,
/// technician categories and notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterSettings {
    /// Company name shown on exports.
    pub company_name: String,
    /// Name of the dashboard operator.
    #[serde(default)]
    pub master_user_name: String,
    /// Cross-app identity of the dashboard operator.
    #[serde(default)]
    pub master_user_id: Option<String>,
    /// Synchronisation settings.
    #[serde(default)]
    pub sync: SyncSettings,
    /// Technician roster.
    #[serde(default)]
    pub technicians: Vec<Technician>,
    /// Known ships.
    #[serde(default)]
    pub ships: Vec<Ship>,
    /// Known locations.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// Category labels technicians can belong to.
    #[serde(default)]
    pub technician_categories: Vec<String>,
    /// Notifications authored on the dashboard.
    #[serde(default)]
    pub notifications: Vec<Notification>,
    /// Dashboard version string.
    #[serde(default = "default_app_version")]
    pub app_version: String,
    /// Version of the persisted data layout.
    #[serde(default = "default_schema_version")]
    pub data_schema_version: u32,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_schema_version() -> u32 {
    1
}

impl Default for MasterSettings {
    fn default() -> Self {
        Self {
            company_name: "R.I.S.O. Master".to_string(),
            master_user_name: String::new(),
            master_user_id: None,
            sync: SyncSettings::default(),
            technicians: Vec::new(),
            ships: Vec::new(),
            locations: Vec::new(),
            technician_categories: Vec::new(),
            notifications: Vec::new(),
            app_version: default_app_version(),
            data_schema_version: default_schema_version(),
        }
    }
}

impl MasterSettings {
    /// Looks up a technician by roster id.
    pub fn technician(&self, id: &str) -> Option<&Technician> {
        self.technicians.iter().find(|t| t.id == id)
    }

    /// Looks up a technician by their technician-app identity.
    pub fn technician_by_user_id(&self, user_id: &str) -> Option<&Technician> {
        self.technicians.iter().find(|t| t.user_id == user_id)
    }

    /// Active technicians, in roster order.
    pub fn active_technicians(&self) -> impl Iterator<Item = &Technician> {
        self.technicians.iter().filter(|t| t.active)
    }

    /// Active technicians assigned to `category`, in roster order.
    pub fn active_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a Technician> + 'a {
        self.active_technicians()
            .filter(move |t| t.category.as_deref() == Some(category))
    }
}
