//! Report storage.
//!
//! [`ReportStore`] owns the reports and implements filing, editing and
//! importing them. The aggregators never see the store directly; they
//! receive a borrowed [`Snapshot`].

mod report_store;
mod snapshot;

pub use report_store::{ImportSummary, ReportStore};
pub use snapshot::Snapshot;
