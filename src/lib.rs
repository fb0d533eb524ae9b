//! Hours engine for the R.I.S.O. Master dashboard
//!
//! This crate aggregates technician field reports into daily and monthly
//! worked hours. Windows contributed by different reports for the same
//! technician are merged rather than summed, overlaps are reported as
//! warnings, absences take precedence over worked time and worked hours are
//! split into ordinary and overtime buckets.
//!
//! The report store, the settings loader, the sync payload builder and an
//! HTTP surface are provided around the engine.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod sync;
