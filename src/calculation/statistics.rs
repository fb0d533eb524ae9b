//! Dashboard counters.
//!
//! These figures use the per-report duration (report span minus pause), not
//! the merged technician windows of the daily aggregator. Overlapping
//! reports are counted twice. Payroll numbers must come from
//! [`calculate_monthly_hours`](super::calculate_monthly_hours).

use std::collections::HashSet;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{DashboardStats, Report};
use crate::store::Snapshot;

use super::time_slots::TimeSlot;

/// Hours between two `HH:MM` times minus a pause, never negative.
///
/// An end earlier than the start is taken to be on the next day.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::report_duration_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(report_duration_hours("08:00", "17:00", 60).unwrap(), Decimal::from(8));
/// assert_eq!(report_duration_hours("22:00", "06:00", 0).unwrap(), Decimal::from(8));
/// ```
pub fn report_duration_hours(
    start_time: &str,
    end_time: &str,
    pause_minutes: u32,
) -> EngineResult<Decimal> {
    let slot = TimeSlot::from_window(start_time, end_time, "")?;
    let worked = slot.minutes().saturating_sub(pause_minutes);
    Ok(Decimal::from(worked) / Decimal::from(60))
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(date)
}

/// Computes the dashboard counters relative to `today`.
///
/// The week set is every report dated on or after the Sunday starting
/// `today`'s week, with no upper bound. `technician_id` restricts every
/// counter to reports the technician authored or appears in; an id not on
/// the roster applies no filter.
///
/// # Errors
///
/// [`EngineError::InvalidTime`](crate::error::EngineError::InvalidTime) when
/// a report in the week or month holds a malformed time.
pub fn calculate_stats(
    snapshot: &Snapshot<'_>,
    today: NaiveDate,
    technician_id: Option<&str>,
) -> EngineResult<DashboardStats> {
    let week_start = start_of_week(today);
    let matching: Vec<&Report> = snapshot
        .reports()
        .iter()
        .filter(|r| snapshot.matches_technician(r, technician_id))
        .collect();

    let today_reports: Vec<&Report> = matching.iter().copied().filter(|r| r.date == today).collect();
    let week_reports = matching.iter().copied().filter(|r| r.date >= week_start);
    let month_reports: Vec<&Report> = matching
        .iter()
        .copied()
        .filter(|r| r.date.year() == today.year() && r.date.month() == today.month())
        .collect();

    let technicians_today: HashSet<&str> = today_reports
        .iter()
        .flat_map(|r| r.technicians.iter().map(|t| t.id.as_str()))
        .collect();

    Ok(DashboardStats {
        reports_today: today_reports.len(),
        total_reports: matching.len(),
        hours_this_week: sum_hours(week_reports)?,
        hours_this_month: sum_hours(month_reports.iter().copied())?,
        ships_this_month: month_reports
            .iter()
            .map(|r| r.ship.as_str())
            .collect::<HashSet<_>>()
            .len(),
        locations_this_month: month_reports
            .iter()
            .map(|r| r.location.as_str())
            .collect::<HashSet<_>>()
            .len(),
        technicians_with_reports_today: technicians_today.len(),
    })
}

fn sum_hours<'a>(reports: impl Iterator<Item = &'a Report>) -> EngineResult<Decimal> {
    reports.map(Report::duration_hours).sum()
}
