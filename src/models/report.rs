//! Report model and related types.
//!
//! A [`Report`] is one work or absence record filed for a calendar day.
//! Field names serialize in camelCase so the same JSON is exchanged with the
//! technician app.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{report_duration_hours, time_to_minutes};
use crate::error::EngineResult;

use super::{ShiftType, Technician};

/// One technician's time window within a report.
///
/// This is a copy taken when the report was filed, not a live reference to
/// the roster: renaming or deleting a [`Technician`] leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTechnician {
    /// Roster id of the technician at filing time.
    pub id: String,
    /// Display name at filing time.
    pub name: String,
    /// Start of the window, `HH:MM`.
    pub start_time: String,
    /// End of the window, `HH:MM`. Earlier than `start_time` when the window
    /// crosses midnight.
    pub end_time: String,
}

/// A work or absence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique identifier.
    pub id: String,
    /// The calendar day the report covers.
    pub date: NaiveDate,
    /// Classification of the day.
    pub shift_type: ShiftType,
    /// Report start, `HH:MM`.
    pub start_time: String,
    /// Report end, `HH:MM`.
    pub end_time: String,
    /// Unpaid break minutes.
    #[serde(default)]
    pub pause_minutes: u32,
    /// Ship the work was done on.
    #[serde(default)]
    pub ship: String,
    /// Port or site.
    #[serde(default)]
    pub location: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Materials used.
    #[serde(default)]
    pub materials: String,
    /// Work carried out.
    #[serde(default)]
    pub work_done: String,
    /// Technicians and their individual windows.
    #[serde(default)]
    pub technicians: Vec<ReportTechnician>,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Last modification time, epoch milliseconds. Zero when unknown.
    #[serde(default)]
    pub updated_at: i64,
    /// Cross-app identity of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Last successful sync, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synced_at: Option<i64>,
    /// Edit counter used by the import conflict policies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Device the report was filed from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl Report {
    /// Returns the version, treating a missing one as 1.
    pub fn effective_version(&self) -> u32 {
        self.version.unwrap_or(1)
    }

    /// Returns the last-modified timestamp, falling back to creation time.
    pub fn last_modified(&self) -> i64 {
        if self.updated_at != 0 {
            self.updated_at
        } else {
            self.created_at
        }
    }

    /// Finds the window a technician contributed to this report.
    pub fn technician_window(&self, technician_id: &str) -> Option<&ReportTechnician> {
        self.technicians.iter().find(|t| t.id == technician_id)
    }

    /// Returns true if the technician authored the report or is listed in it,
    /// by id or by name.
    pub fn involves(&self, technician: &Technician) -> bool {
        self.user_id.as_deref() == Some(technician.user_id.as_str())
            || self
                .technicians
                .iter()
                .any(|t| t.id == technician.id || t.name == technician.name)
    }

    /// Report duration in hours: end minus start minus the pause, never
    /// negative.
    ///
    /// This is the cheap per-report figure used by dashboard tiles. It does
    /// not look at individual technician windows.
    ///
    /// # Examples
    ///
    /// ```
    /// use riso_hours::models::{Report, ShiftType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let report = Report {
    ///     id: "r1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2025, 10, 17).unwrap(),
    ///     shift_type: ShiftType::Ordinaria,
    ///     start_time: "08:00".to_string(),
    ///     end_time: "17:00".to_string(),
    ///     pause_minutes: 60,
    ///     ship: String::new(),
    ///     location: String::new(),
    ///     description: String::new(),
    ///     materials: String::new(),
    ///     work_done: String::new(),
    ///     technicians: vec![],
    ///     created_at: 0,
    ///     updated_at: 0,
    ///     user_id: None,
    ///     synced_at: None,
    ///     version: None,
    ///     device_id: None,
    /// };
    /// assert_eq!(report.duration_hours().unwrap(), Decimal::from(8));
    /// ```
    pub fn duration_hours(&self) -> EngineResult<Decimal> {
        report_duration_hours(&self.start_time, &self.end_time, self.pause_minutes)
    }

    /// Checks that the report window and every technician window are `HH:MM`.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime)
    /// for the first malformed value.
    pub fn validate_times(&self) -> EngineResult<()> {
        let windows = std::iter::once((&self.start_time, &self.end_time)).chain(
            self.technicians
                .iter()
                .map(|t| (&t.start_time, &t.end_time)),
        );
        for (start, end) in windows {
            time_to_minutes(start, false)?;
            time_to_minutes(end, false)?;
        }
        Ok(())
    }
}

/// The fields a caller supplies when filing a new report.
///
/// The store assigns id, timestamps and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    /// The calendar day.
    pub date: NaiveDate,
    /// Classification of the day.
    pub shift_type: ShiftType,
    /// Report start, `HH:MM`.
    pub start_time: String,
    /// Report end, `HH:MM`.
    pub end_time: String,
    /// Unpaid break minutes.
    #[serde(default)]
    pub pause_minutes: u32,
    /// Ship.
    #[serde(default)]
    pub ship: String,
    /// Location.
    #[serde(default)]
    pub location: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Materials.
    #[serde(default)]
    pub materials: String,
    /// Work done.
    #[serde(default)]
    pub work_done: String,
    /// Additional technicians besides the author.
    #[serde(default)]
    pub technicians: Vec<ReportTechnician>,
    /// Cross-app identity of the author.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Device the report was filed from.
    #[serde(default)]
    pub device_id: Option<String>,
}

/// A partial update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUpdate {
    /// New calendar day.
    pub date: Option<NaiveDate>,
    /// New classification.
    pub shift_type: Option<ShiftType>,
    /// New start, `HH:MM`.
    pub start_time: Option<String>,
    /// New end, `HH:MM`.
    pub end_time: Option<String>,
    /// New break minutes.
    pub pause_minutes: Option<u32>,
    /// New ship.
    pub ship: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New materials.
    pub materials: Option<String>,
    /// New work done.
    pub work_done: Option<String>,
    /// Replacement technician list.
    pub technicians: Option<Vec<ReportTechnician>>,
}

impl ReportUpdate {
    /// Copies every present field onto the report.
    pub fn apply_to(self, report: &mut Report) {
        if let Some(date) = self.date {
            report.date = date;
        }
        if let Some(shift_type) = self.shift_type {
            report.shift_type = shift_type;
        }
        if let Some(start_time) = self.start_time {
            report.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            report.end_time = end_time;
        }
        if let Some(pause_minutes) = self.pause_minutes {
            report.pause_minutes = pause_minutes;
        }
        if let Some(ship) = self.ship {
            report.ship = ship;
        }
        if let Some(location) = self.location {
            report.location = location;
        }
        if let Some(description) = self.description {
            report.description = description;
        }
        if let Some(materials) = self.materials {
            report.materials = materials;
        }
        if let Some(work_done) = self.work_done {
            report.work_done = work_done;
        }
        if let Some(technicians) = self.technicians {
            report.technicians = technicians;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report(shift_type: ShiftType, start: &str, end: &str, pause: u32) -> Report {
        Report {
            id: "r1".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 17).unwrap(),
            shift_type,
            start_time: start.to_string(),
            end_time: end.to_string(),
            pause_minutes: pause,
            ship: "MSC Magnifica".to_string(),
            location: "Porto di Genova".to_string(),
            description: String::new(),
            materials: String::new(),
            work_done: String::new(),
            technicians: vec![ReportTechnician {
                id: "tech2".to_string(),
                name: "Luca Bianchi".to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
            }],
            created_at: 1_000,
            updated_at: 0,
            user_id: Some("T001".to_string()),
            synced_at: None,
            version: None,
            device_id: None,
        }
    }

    fn make_technician(id: &str, name: &str, user_id: &str) -> Technician {
        Technician {
            id: id.to_string(),
            name: name.to_string(),
            email: None,
            phone: None,
            active: true,
            user_id: user_id.to_string(),
            category: None,
        }
    }

    #[test]
    fn test_deserialize_technician_app_json() {
        let json = r#"{
            "id": "1729150000000",
            "date": "2025-10-17",
            "shiftType": "Straordinaria",
            "startTime": "08:00",
            "endTime": "17:00",
            "pauseMinutes": 30,
            "ship": "Costa Pacifica",
            "location": "Porto di Napoli",
            "description": "Manutenzione",
            "materials": "",
            "workDone": "",
            "technicians": [
                {"id": "tech1", "name": "Marco Rossi", "startTime": "08:00", "endTime": "17:00"}
            ],
            "createdAt": 1729150000000,
            "updatedAt": 1729150000000,
            "userId": "T001",
            "version": 2
        }"#;

        let report: Report = serde_json::from_str(json).unwrap();
        assert_eq!(report.shift_type, ShiftType::Straordinaria);
        assert_eq!(report.pause_minutes, 30);
        assert_eq!(report.technicians.len(), 1);
        assert_eq!(report.user_id.as_deref(), Some("T001"));
        assert_eq!(report.effective_version(), 2);
        assert_eq!(report.device_id, None);
    }

    #[test]
    fn test_serialize_uses_camel_case_and_skips_missing_options() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["shiftType"], "Ordinaria");
        assert_eq!(json["pauseMinutes"], 0);
        assert!(json.get("syncedAt").is_none());
        assert!(json.get("version").is_none());
    }

    #[test]
    fn test_duration_subtracts_pause() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "17:00", 60);
        assert_eq!(report.duration_hours().unwrap(), Decimal::from(8));
    }

    #[test]
    fn test_duration_crossing_midnight() {
        let report = make_report(ShiftType::Ordinaria, "22:00", "02:00", 0);
        assert_eq!(report.duration_hours().unwrap(), Decimal::from(4));
    }

    #[test]
    fn test_duration_never_negative() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "08:30", 60);
        assert_eq!(report.duration_hours().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_validate_times_accepts_overnight_windows() {
        let report = make_report(ShiftType::Ordinaria, "22:00", "02:00", 0);
        assert!(report.validate_times().is_ok());
    }

    #[test]
    fn test_validate_times_checks_report_window() {
        let mut report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        report.end_time = "12.00".to_string();
        assert!(matches!(
            report.validate_times(),
            Err(crate::error::EngineError::InvalidTime { value, .. }) if value == "12.00"
        ));
    }

    #[test]
    fn test_validate_times_checks_technician_windows() {
        let mut report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        report.technicians[0].start_time = "25:00".to_string();
        assert!(report.validate_times().is_err());
    }

    #[test]
    fn test_effective_version_defaults_to_one() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        assert_eq!(report.effective_version(), 1);
    }

    #[test]
    fn test_last_modified_falls_back_to_created_at() {
        let mut report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        assert_eq!(report.last_modified(), 1_000);
        report.updated_at = 5_000;
        assert_eq!(report.last_modified(), 5_000);
    }

    #[test]
    fn test_involves_by_author_id_and_name() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);

        assert!(report.involves(&make_technician("tech1", "Marco Rossi", "T001")));
        assert!(report.involves(&make_technician("tech2", "Someone Else", "T999")));
        assert!(report.involves(&make_technician("tech77", "Luca Bianchi", "T999")));
        assert!(!report.involves(&make_technician("tech3", "Paolo Verdi", "T003")));
    }

    #[test]
    fn test_technician_window_lookup() {
        let report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        assert!(report.technician_window("tech2").is_some());
        assert!(report.technician_window("tech1").is_none());
    }

    #[test]
    fn test_update_applies_only_present_fields() {
        let mut report = make_report(ShiftType::Ordinaria, "08:00", "12:00", 0);
        let update = ReportUpdate {
            end_time: Some("13:00".to_string()),
            ship: Some("Carnival Dream".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut report);

        assert_eq!(report.start_time, "08:00");
        assert_eq!(report.end_time, "13:00");
        assert_eq!(report.ship, "Carnival Dream");
        assert_eq!(report.location, "Porto di Genova");
    }
}
