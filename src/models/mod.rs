//! Core data models for the hours engine.
//!
//! This module contains the persisted records (reports, roster entries,
//! notifications) and the derived summaries the aggregators produce.

mod hours;
mod notification;
mod report;
mod shift_type;
mod stats;
mod technician;

pub use hours::{DailyTechnicianHours, DayHours, MonthlyTechnicianHours, OverlapWarning};
pub use notification::{Notification, NotificationKind, Priority};
pub use report::{Report, ReportDraft, ReportTechnician, ReportUpdate};
pub use shift_type::{DayStatus, ShiftType};
pub use stats::DashboardStats;
pub use technician::{Location, Ship, Technician};
