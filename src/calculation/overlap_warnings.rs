//! Overlap warnings for one date.

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::OverlapWarning;
use crate::store::Snapshot;

use super::daily_hours::calculate_daily_hours;

/// Lists every overlap warning the daily aggregator finds on `date`, one
/// entry per message, attributed to the technician's name.
pub fn get_overlap_warnings(
    snapshot: &Snapshot<'_>,
    date: NaiveDate,
) -> EngineResult<Vec<OverlapWarning>> {
    Ok(calculate_daily_hours(snapshot, date)?
        .into_iter()
        .flat_map(|daily| {
            let name = daily.technician_name;
            daily.warnings.into_iter().map(move |warning| OverlapWarning {
                technician_name: name.clone(),
                warning,
            })
        })
        .collect())
}
