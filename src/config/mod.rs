//! Configuration loading and management for the hours engine.
//!
//! This module loads the dashboard settings from YAML: company identity,
//! technician roster, ships, locations, technician categories, notifications
//! and the synchronisation policy.
//!
//! # Example
//!
//! ```no_run
//! use riso_hours::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/riso").unwrap();
//! println!("Loaded settings for: {}", config.settings().company_name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ConflictResolution, MasterSettings, SyncSettings};
