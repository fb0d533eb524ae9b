//! Dashboard counters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard tiles.
///
/// Hour figures are the naive per-report sum (report span minus pause) and
/// can count the same technician twice when reports overlap. Payroll figures
/// come from the daily and monthly aggregators instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Reports dated today.
    pub reports_today: usize,
    /// All reports matching the technician filter.
    pub total_reports: usize,
    /// Hours from reports dated on or after the start of the week.
    pub hours_this_week: Decimal,
    /// Hours from reports in the current month.
    pub hours_this_month: Decimal,
    /// Distinct ships in the current month.
    pub ships_this_month: usize,
    /// Distinct locations in the current month.
    pub locations_this_month: usize,
    /// Distinct technician ids listed in today's reports.
    pub technicians_with_reports_today: usize,
}
