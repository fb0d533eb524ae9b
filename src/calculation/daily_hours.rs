//! Per-day hours for every technician.
//!
//! The daily aggregator groups a date's reports by technician, merges each
//! technician's windows, classifies the day and splits ordinary from
//! overtime hours. It reads the snapshot and never writes to it.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{DailyTechnicianHours, DayStatus, Report};
use crate::store::Snapshot;

use super::collation::compare_it;
use super::daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, split_daily_overtime};
use super::time_slots::{TimeSlot, merge_time_slots};

/// Entries in first-seen order with an id index.
#[derive(Default)]
struct DayEntries {
    entries: Vec<DailyTechnicianHours>,
    index: HashMap<String, usize>,
}

impl DayEntries {
    fn get_mut(&mut self, technician_id: &str) -> Option<&mut DailyTechnicianHours> {
        let idx = *self.index.get(technician_id)?;
        Some(&mut self.entries[idx])
    }

    fn contains(&self, technician_id: &str) -> bool {
        self.index.contains_key(technician_id)
    }

    fn insert(&mut self, entry: DailyTechnicianHours) {
        self.index
            .insert(entry.technician_id.clone(), self.entries.len());
        self.entries.push(entry);
    }
}

/// Calculates every technician's hours for `date`.
///
/// 1. Absence reports resolve their author through `user_id`. The first
///    absence seen for a technician sets the day's category; later ones are
///    ignored, and authors missing from the roster are skipped.
/// 2. Worked reports add every listed technician. A `Straordinaria` or
///    `Festiva` report upgrades the day's classification, the last one
///    seen winning.
/// 3. For each technician not on an absence, their windows across worked
///    reports are merged and split at 8 hours. Windows listed on absence
///    reports never count. Overlaps become warnings.
/// 4. Active roster technicians with nothing filed are reported `Assente`.
///
/// The report's `pause_minutes` is not applied here; individual windows are
/// taken to exclude breaks already. Results are sorted by name in Italian
/// collation order.
///
/// # Errors
///
/// [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime) when
/// a technician window holds a malformed time.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::calculate_daily_hours;
/// use riso_hours::store::Snapshot;
/// use chrono::NaiveDate;
///
/// let snapshot = Snapshot::new(&[], &[]);
/// let date = NaiveDate::from_ymd_opt(2025, 10, 17).unwrap();
/// assert!(calculate_daily_hours(&snapshot, date).unwrap().is_empty());
/// ```
pub fn calculate_daily_hours(
    snapshot: &Snapshot<'_>,
    date: NaiveDate,
) -> EngineResult<Vec<DailyTechnicianHours>> {
    let mut day = DayEntries::default();

    for report in snapshot.reports_on(date) {
        if report.shift_type.is_absence() {
            record_absence(snapshot, &mut day, report);
        } else {
            record_worked(&mut day, report);
        }
    }

    for entry in &mut day.entries {
        if entry.shift_type.is_absence() {
            continue;
        }
        compute_hours(entry, date)?;
    }

    for technician in snapshot.active_technicians() {
        if !day.contains(&technician.id) {
            day.insert(DailyTechnicianHours::absent(
                technician.id.clone(),
                technician.name.clone(),
            ));
        }
    }

    let mut entries = day.entries;
    entries.sort_by(|a, b| compare_it(&a.technician_name, &b.technician_name));

    debug!(
        %date,
        technicians = entries.len(),
        "Daily hours calculated"
    );

    Ok(entries)
}

fn record_absence(snapshot: &Snapshot<'_>, day: &mut DayEntries, report: &Report) {
    let Some(technician) = report
        .user_id
        .as_deref()
        .and_then(|user_id| snapshot.technician_by_user_id(user_id))
    else {
        debug!(report_id = %report.id, "Skipping absence report without a known author");
        return;
    };

    if day.contains(&technician.id) {
        return;
    }

    let mut entry = DailyTechnicianHours::empty(
        technician.id.clone(),
        technician.name.clone(),
        report.shift_type.into(),
    );
    entry.reports.push(report.clone());
    day.insert(entry);
}

fn record_worked(day: &mut DayEntries, report: &Report) {
    for tech in &report.technicians {
        match day.get_mut(&tech.id) {
            Some(entry) => {
                entry.reports.push(report.clone());
                if report.shift_type.overrides_ordinary() {
                    entry.shift_type = DayStatus::Shift(report.shift_type);
                }
            }
            None => {
                let mut entry = DailyTechnicianHours::empty(
                    tech.id.clone(),
                    tech.name.clone(),
                    report.shift_type.into(),
                );
                entry.reports.push(report.clone());
                day.insert(entry);
            }
        }
    }
}

fn compute_hours(entry: &mut DailyTechnicianHours, date: NaiveDate) -> EngineResult<()> {
    let slots = entry
        .reports
        .iter()
        .filter(|report| !report.shift_type.is_absence())
        .filter_map(|report| {
            report
                .technician_window(&entry.technician_id)
                .map(|w| TimeSlot::from_window(&w.start_time, &w.end_time, report.id.clone()))
        })
        .collect::<EngineResult<Vec<_>>>()?;

    let merged = merge_time_slots(&slots);
    let total_hours = Decimal::from(merged.total_minutes) / Decimal::from(60);
    let split = split_daily_overtime(total_hours, DEFAULT_DAILY_OVERTIME_THRESHOLD);

    entry.total_hours = total_hours;
    entry.ordinary_hours = split.ordinary_hours;
    entry.overtime_hours = split.overtime_hours;

    if !merged.overlaps.is_empty() {
        warn!(
            technician = %entry.technician_name,
            %date,
            overlaps = %merged.overlaps.join(", "),
            "Overlapping time windows"
        );
        entry.warnings = merged.overlaps;
    }

    Ok(())
}
