//! The report store: an owned, newest-first list of reports with JSON
//! persistence and the import conflict policies.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ConflictResolution;
use crate::error::{EngineError, EngineResult};
use crate::models::{Report, ReportDraft, ReportTechnician, ReportUpdate, Technician};

use super::Snapshot;

/// Counts of what an import did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    /// Reports with a previously unknown id, appended to the store.
    pub imported: usize,
    /// Existing reports replaced by their incoming version.
    pub updated: usize,
    /// Incoming reports discarded in favour of the local copy.
    pub skipped: usize,
    /// Incoming reports refused because a time is not `HH:MM`.
    pub rejected: usize,
}

/// Owned collection of reports, newest first.
///
/// # Example
///
/// ```
/// use riso_hours::store::ReportStore;
///
/// let store = ReportStore::default();
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStore {
    reports: Vec<Report>,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl ReportStore {
    /// Wraps an existing list of reports, keeping its order.
    pub fn from_reports(reports: Vec<Report>) -> Self {
        Self { reports }
    }

    /// Loads the store from a JSON array of reports.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// [`EngineError::StoreError`] if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        if !path.exists() {
            debug!(path = %path_str, "No report file, starting empty");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| EngineError::StoreError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        let reports: Vec<Report> =
            serde_json::from_str(&content).map_err(|e| EngineError::StoreError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        debug!(path = %path_str, reports = reports.len(), "Reports loaded");
        Ok(Self { reports })
    }

    /// Writes the store as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// [`EngineError::StoreError`] if serialization or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let json = serde_json::to_string_pretty(&self.reports).map_err(|e| {
            EngineError::StoreError {
                path: path_str.clone(),
                message: e.to_string(),
            }
        })?;

        fs::write(path, json).map_err(|e| EngineError::StoreError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// All reports, newest first.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Number of reports.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true when the store holds no reports.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Finds a report by id.
    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// A read-only view for the aggregators.
    pub fn snapshot<'a>(&'a self, roster: &'a [Technician]) -> Snapshot<'a> {
        Snapshot::new(&self.reports, roster)
    }

    /// Files a new report at the front of the store.
    ///
    /// The store assigns a fresh id, sets both timestamps to now and the
    /// version to 1. When the author's `user_id` is on the roster, the author
    /// is prepended to the technician list with the report's own times.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidTime`] if any window is not `HH:MM`; nothing is
    /// stored.
    pub fn add_report(
        &mut self,
        draft: ReportDraft,
        roster: &[Technician],
    ) -> EngineResult<&Report> {
        let timestamp = now_millis();

        let author = draft
            .user_id
            .as_deref()
            .and_then(|user_id| roster.iter().find(|t| t.user_id == user_id))
            .map(|t| ReportTechnician {
                id: t.id.clone(),
                name: t.name.clone(),
                start_time: draft.start_time.clone(),
                end_time: draft.end_time.clone(),
            });

        let mut technicians = Vec::with_capacity(draft.technicians.len() + 1);
        technicians.extend(author);
        technicians.extend(draft.technicians);

        let report = Report {
            id: Uuid::new_v4().to_string(),
            date: draft.date,
            shift_type: draft.shift_type,
            start_time: draft.start_time,
            end_time: draft.end_time,
            pause_minutes: draft.pause_minutes,
            ship: draft.ship,
            location: draft.location,
            description: draft.description,
            materials: draft.materials,
            work_done: draft.work_done,
            technicians,
            created_at: timestamp,
            updated_at: timestamp,
            user_id: draft.user_id,
            synced_at: None,
            version: Some(1),
            device_id: draft.device_id,
        };
        report.validate_times()?;

        debug!(report_id = %report.id, date = %report.date, "Report added");
        self.reports.insert(0, report);
        Ok(&self.reports[0])
    }

    /// Applies a partial update, bumping the version and `updated_at`.
    ///
    /// # Errors
    ///
    /// [`EngineError::ReportNotFound`] for an unknown id.
    /// [`EngineError::InvalidTime`] if the updated report holds a time that
    /// is not `HH:MM`; the stored report is left unchanged.
    pub fn update_report(&mut self, id: &str, update: ReportUpdate) -> EngineResult<&Report> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| EngineError::ReportNotFound { id: id.to_string() })?;

        let mut report = self.reports[index].clone();
        update.apply_to(&mut report);
        report.validate_times()?;
        report.version = Some(report.effective_version() + 1);
        report.updated_at = now_millis();

        debug!(report_id = %id, version = report.effective_version(), "Report updated");
        self.reports[index] = report;
        Ok(&self.reports[index])
    }

    /// Removes a report, returning it.
    ///
    /// # Errors
    ///
    /// [`EngineError::ReportNotFound`] for an unknown id.
    pub fn delete_report(&mut self, id: &str) -> EngineResult<Report> {
        let index = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| EngineError::ReportNotFound { id: id.to_string() })?;

        debug!(report_id = %id, "Report deleted");
        Ok(self.reports.remove(index))
    }

    /// Merges reports received from the technician app.
    ///
    /// Unknown ids are appended. An id already in the store is resolved by
    /// `policy`:
    ///
    /// - [`ConflictResolution::MasterWins`]: the local report is kept.
    /// - [`ConflictResolution::TechnicianWins`]: the incoming report replaces
    ///   it, with version set to the local version plus one.
    /// - [`ConflictResolution::Manual`]: the incoming report replaces it only
    ///   if its version is greater, or equal with a later modification time.
    ///
    /// Missing versions count as 1. A report with a time that is not `HH:MM`
    /// is rejected before any of this and never reaches the store.
    pub fn import_reports(
        &mut self,
        incoming: Vec<Report>,
        policy: ConflictResolution,
    ) -> ImportSummary {
        let mut index: HashMap<String, usize> = self
            .reports
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
        let mut summary = ImportSummary::default();

        for report in incoming {
            if let Err(err) = report.validate_times() {
                warn!(report_id = %report.id, error = %err, "Rejecting report with malformed time");
                summary.rejected += 1;
                continue;
            }

            let Some(&i) = index.get(&report.id) else {
                index.insert(report.id.clone(), self.reports.len());
                self.reports.push(report);
                summary.imported += 1;
                continue;
            };

            let existing = &self.reports[i];
            let replacement = match policy {
                ConflictResolution::MasterWins => None,
                ConflictResolution::TechnicianWins => {
                    let version = existing.effective_version() + 1;
                    Some(Report {
                        version: Some(version),
                        ..report
                    })
                }
                ConflictResolution::Manual => {
                    let newer = report.effective_version() > existing.effective_version()
                        || (report.effective_version() == existing.effective_version()
                            && report.last_modified() > existing.last_modified());
                    newer.then_some(report)
                }
            };

            match replacement {
                Some(report) => {
                    debug!(report_id = %report.id, ?policy, "Conflict resolved for incoming report");
                    self.reports[i] = report;
                    summary.updated += 1;
                }
                None => {
                    debug!(report_id = %existing.id, ?policy, "Conflict resolved for local report");
                    summary.skipped += 1;
                }
            }
        }

        info!(
            imported = summary.imported,
            updated = summary.updated,
            skipped = summary.skipped,
            rejected = summary.rejected,
            ?policy,
            "Reports imported"
        );

        summary
    }

    /// Reports dated `date`, optionally restricted to one technician.
    ///
    /// A technician id that is not on the roster applies no filter.
    pub fn reports_by_date<'a>(
        &'a self,
        date: NaiveDate,
        technician_id: Option<&str>,
        roster: &'a [Technician],
    ) -> Vec<&'a Report> {
        let snapshot = self.snapshot(roster);
        snapshot
            .reports_on(date)
            .filter(|r| snapshot.matches_technician(r, technician_id))
            .collect()
    }

    /// Reports in a year and zero-based month, optionally restricted to one
    /// technician.
    pub fn reports_by_month<'a>(
        &'a self,
        year: i32,
        month0: u32,
        technician_id: Option<&str>,
        roster: &'a [Technician],
    ) -> Vec<&'a Report> {
        let snapshot = self.snapshot(roster);
        snapshot
            .reports_in_month(year, month0)
            .filter(|r| snapshot.matches_technician(r, technician_id))
            .collect()
    }
}
