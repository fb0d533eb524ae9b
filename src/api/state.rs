//! Application state for the hours engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::store::ReportStore;

/// Shared application state.
///
/// Holds the loaded settings and the report store. Handlers take a read
/// guard on the store for the aggregators and a write guard for imports.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<ReportStore>>,
}

impl AppState {
    /// Creates a new application state from loaded settings and reports.
    pub fn new(config: ConfigLoader, store: ReportStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the lock guarding the report store.
    pub fn store(&self) -> &RwLock<ReportStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MasterSettings;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_the_store() {
        let state = AppState::new(
            ConfigLoader::from_settings(MasterSettings::default()),
            ReportStore::default(),
        );
        let clone = state.clone();

        clone
            .store()
            .write()
            .await
            .import_reports(Vec::new(), Default::default());
        assert!(Arc::ptr_eq(&state.store, &clone.store));
    }
}
