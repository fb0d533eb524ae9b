//! Monthly roll-up of daily hours.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::MonthlyTechnicianHours;
use crate::store::Snapshot;

use super::collation::compare_it;
use super::daily_hours::calculate_daily_hours;

/// Every day of a month, given a zero-based month.
///
/// # Errors
///
/// [`EngineError::InvalidMonth`] when `month0` is above 11 or the year is
/// out of chrono's range.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 1).unwrap().len(), 29);
/// assert_eq!(days_in_month(2025, 10).unwrap().len(), 30);
/// assert!(days_in_month(2025, 12).is_err());
/// ```
pub fn days_in_month(year: i32, month0: u32) -> EngineResult<Vec<NaiveDate>> {
    let first = month0
        .checked_add(1)
        .and_then(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .ok_or(EngineError::InvalidMonth { year, month: month0 })?;

    Ok(first
        .iter_days()
        .take_while(|d| d.month() == first.month())
        .collect())
}

/// Rolls the daily aggregator up over one month.
///
/// `month0` is zero-based. With `technician_id` only that technician is
/// returned; an id that is not on the roster returns everyone. Presence days
/// count days with more than zero hours; absence days are counted per
/// absence category plus `Assente`. Warnings carry their date as prefix.
/// Results are sorted by name in Italian collation order.
///
/// # Errors
///
/// [`EngineError::InvalidMonth`] for a bad month, and anything
/// [`calculate_daily_hours`] returns.
pub fn calculate_monthly_hours(
    snapshot: &Snapshot<'_>,
    year: i32,
    month0: u32,
    technician_id: Option<&str>,
) -> EngineResult<Vec<MonthlyTechnicianHours>> {
    let filter = technician_id.and_then(|id| snapshot.technician(id));

    let mut summaries: Vec<MonthlyTechnicianHours> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for date in days_in_month(year, month0)? {
        for daily in calculate_daily_hours(snapshot, date)? {
            if filter.is_some_and(|t| t.id != daily.technician_id) {
                continue;
            }

            let idx = *index.entry(daily.technician_id.clone()).or_insert_with(|| {
                summaries.push(MonthlyTechnicianHours::new(
                    daily.technician_id.clone(),
                    daily.technician_name.clone(),
                ));
                summaries.len() - 1
            });
            summaries[idx].add_day(date, &daily);
        }
    }

    summaries.sort_by(|a, b| compare_it(&a.technician_name, &b.technician_name));

    debug!(
        year,
        month0,
        technicians = summaries.len(),
        "Monthly hours calculated"
    );

    Ok(summaries)
}
