//! Derived hour summaries.
//!
//! These structures are recomputed from a [`Snapshot`](crate::store::Snapshot)
//! on every call. They are never persisted and hold copies of the reports
//! they were built from, not references into the store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DayStatus, Report};

/// One technician's hours for one day.
///
/// # Example
///
/// ```
/// use riso_hours::models::{DailyTechnicianHours, DayStatus};
/// use rust_decimal::Decimal;
///
/// let absent = DailyTechnicianHours::absent("tech3", "Paolo Verdi");
/// assert_eq!(absent.shift_type, DayStatus::Assente);
/// assert_eq!(absent.total_hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTechnicianHours {
    /// Roster id.
    pub technician_id: String,
    /// Display name.
    pub technician_name: String,
    /// Union of the technician's windows, in hours.
    pub total_hours: Decimal,
    /// Hours up to the daily threshold.
    pub ordinary_hours: Decimal,
    /// Hours beyond the daily threshold.
    pub overtime_hours: Decimal,
    /// Effective classification of the day.
    pub shift_type: DayStatus,
    /// Reports the technician appears in, in store order.
    pub reports: Vec<Report>,
    /// Overlap messages from merging the technician's windows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl DailyTechnicianHours {
    /// A zero-hours entry with the given status and no reports yet.
    pub fn empty(
        technician_id: impl Into<String>,
        technician_name: impl Into<String>,
        shift_type: DayStatus,
    ) -> Self {
        Self {
            technician_id: technician_id.into(),
            technician_name: technician_name.into(),
            total_hours: Decimal::ZERO,
            ordinary_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            shift_type,
            reports: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// The entry synthesized for an active technician with no reports.
    pub fn absent(technician_id: impl Into<String>, technician_name: impl Into<String>) -> Self {
        Self::empty(technician_id, technician_name, DayStatus::Assente)
    }
}

/// One day inside a monthly summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    /// Total hours for the day.
    pub hours: Decimal,
    /// Ordinary hours for the day.
    pub ordinary_hours: Decimal,
    /// Overtime hours for the day.
    pub overtime_hours: Decimal,
    /// Classification of the day.
    pub shift_type: DayStatus,
}

impl From<&DailyTechnicianHours> for DayHours {
    fn from(daily: &DailyTechnicianHours) -> Self {
        Self {
            hours: daily.total_hours,
            ordinary_hours: daily.ordinary_hours,
            overtime_hours: daily.overtime_hours,
            shift_type: daily.shift_type,
        }
    }
}

/// One technician's hours across a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTechnicianHours {
    /// Roster id.
    pub technician_id: String,
    /// Display name, as seen on the first day the technician appeared.
    pub technician_name: String,
    /// Per-day breakdown.
    pub days: BTreeMap<NaiveDate, DayHours>,
    /// Sum of daily totals.
    pub total_hours: Decimal,
    /// Sum of daily ordinary hours.
    pub total_ordinary_hours: Decimal,
    /// Sum of daily overtime hours.
    pub total_overtime_hours: Decimal,
    /// Days with more than zero hours.
    pub presence_days: u32,
    /// Days per absence category, including `Assente`.
    pub absence_days: BTreeMap<DayStatus, u32>,
    /// Overlap messages prefixed with their date.
    pub warnings: Vec<String>,
}

impl MonthlyTechnicianHours {
    /// An empty summary for the technician.
    pub fn new(technician_id: impl Into<String>, technician_name: impl Into<String>) -> Self {
        Self {
            technician_id: technician_id.into(),
            technician_name: technician_name.into(),
            days: BTreeMap::new(),
            total_hours: Decimal::ZERO,
            total_ordinary_hours: Decimal::ZERO,
            total_overtime_hours: Decimal::ZERO,
            presence_days: 0,
            absence_days: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Folds one day into the summary.
    pub fn add_day(&mut self, date: NaiveDate, daily: &DailyTechnicianHours) {
        self.days.insert(date, DayHours::from(daily));
        self.total_hours += daily.total_hours;
        self.total_ordinary_hours += daily.ordinary_hours;
        self.total_overtime_hours += daily.overtime_hours;

        if daily.total_hours > Decimal::ZERO {
            self.presence_days += 1;
        }

        if daily.shift_type.counts_as_absence_day() {
            *self.absence_days.entry(daily.shift_type).or_insert(0) += 1;
        }

        self.warnings.extend(
            daily
                .warnings
                .iter()
                .map(|warning| format!("{}: {}", date, warning)),
        );
    }
}

/// An overlap message attributed to a technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapWarning {
    /// Display name of the technician.
    pub technician_name: String,
    /// The overlap message.
    pub warning: String,
}
