//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading dashboard
//! settings from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Technician;

use super::types::MasterSettings;

/// Loads and provides access to the dashboard settings.
///
/// # Directory Structure
///
/// ```text
/// config/riso/
/// ├── settings.yaml   # Company, roster, ships, locations, sync
/// └── reports.json    # Report store (optional, see ReportStore::load)
/// ```
///
/// # Example
///
/// ```no_run
/// use riso_hours::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/riso").unwrap();
/// println!("Company: {}", loader.settings().company_name);
/// for technician in loader.active_technicians() {
///     println!("{}", technician.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: MasterSettings,
}

impl ConfigLoader {
    /// Loads `settings.yaml` from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if the file is missing
    /// - [`EngineError::ConfigParseError`] if it is not valid settings YAML
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let settings_path = path.as_ref().join("settings.yaml");
        let settings = Self::load_yaml::<MasterSettings>(&settings_path)?;

        tracing::debug!(
            path = %settings_path.display(),
            technicians = settings.technicians.len(),
            "Settings loaded"
        );

        Ok(Self { settings })
    }

    /// Wraps settings that were built in memory.
    pub fn from_settings(settings: MasterSettings) -> Self {
        Self { settings }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &MasterSettings {
        &self.settings
    }

    /// Consumes the loader, returning the settings.
    pub fn into_settings(self) -> MasterSettings {
        self.settings
    }

    /// Looks up a technician by roster id.
    pub fn technician(&self, id: &str) -> Option<&Technician> {
        self.settings.technician(id)
    }

    /// Looks up a technician by their technician-app identity.
    pub fn technician_by_user_id(&self, user_id: &str) -> Option<&Technician> {
        self.settings.technician_by_user_id(user_id)
    }

    /// Active technicians, in roster order.
    pub fn active_technicians(&self) -> impl Iterator<Item = &Technician> {
        self.settings.active_technicians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConflictResolution;

    fn config_path() -> &'static str {
        "./config/riso"
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().company_name, "R.I.S.O. Master");
        assert_eq!(loader.settings().technicians.len(), 10);
        assert_eq!(loader.settings().ships.len(), 3);
        assert_eq!(loader.settings().locations.len(), 3);
        assert_eq!(
            loader.settings().sync.conflict_resolution,
            ConflictResolution::MasterWins
        );
    }

    #[test]
    fn test_technician_lookups() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        assert_eq!(loader.technician("tech1").unwrap().name, "Marco Rossi");
        assert_eq!(loader.technician_by_user_id("T002").unwrap().id, "tech2");
        assert!(loader.technician("unknown").is_none());
        assert_eq!(loader.active_technicians().count(), 10);
    }

    #[test]
    fn test_missing_directory_returns_not_found() {
        let result = ConfigLoader::load("./config/does-not-exist");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join(format!("riso-config-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("settings.yaml"), "company_name: [unclosed").unwrap();

        let result = ConfigLoader::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
