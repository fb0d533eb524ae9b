//! Read-only view over reports and the technician roster.

use chrono::{Datelike, NaiveDate};

use crate::models::{Report, Technician};

/// An immutable snapshot of the report store and roster.
///
/// Every aggregator is a pure function of a `Snapshot`. Nothing in the
/// calculation layer mutates it or keeps references past the call.
///
/// # Example
///
/// ```
/// use riso_hours::store::Snapshot;
///
/// let snapshot = Snapshot::new(&[], &[]);
/// assert_eq!(snapshot.reports().len(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    reports: &'a [Report],
    technicians: &'a [Technician],
}

impl<'a> Snapshot<'a> {
    /// Wraps borrowed reports and roster.
    pub fn new(reports: &'a [Report], technicians: &'a [Technician]) -> Self {
        Self {
            reports,
            technicians,
        }
    }

    /// All reports, in store order.
    pub fn reports(&self) -> &'a [Report] {
        self.reports
    }

    /// The roster.
    pub fn technicians(&self) -> &'a [Technician] {
        self.technicians
    }

    /// Reports dated `date`, in store order.
    pub fn reports_on(&self, date: NaiveDate) -> impl Iterator<Item = &'a Report> + 'a {
        self.reports.iter().filter(move |r| r.date == date)
    }

    /// Reports in the given year and zero-based month, in store order.
    pub fn reports_in_month(&self, year: i32, month0: u32) -> impl Iterator<Item = &'a Report> + 'a {
        self.reports
            .iter()
            .filter(move |r| r.date.year() == year && r.date.month0() == month0)
    }

    /// Looks up a roster technician by id.
    pub fn technician(&self, id: &str) -> Option<&'a Technician> {
        self.technicians.iter().find(|t| t.id == id)
    }

    /// Looks up a roster technician by their technician-app identity.
    pub fn technician_by_user_id(&self, user_id: &str) -> Option<&'a Technician> {
        self.technicians.iter().find(|t| t.user_id == user_id)
    }

    /// Active roster technicians.
    pub fn active_technicians(&self) -> impl Iterator<Item = &'a Technician> + 'a {
        self.technicians.iter().filter(|t| t.active)
    }

    /// Returns true when `report` passes the optional technician filter.
    ///
    /// A filter id that is not on the roster matches every report.
    pub fn matches_technician(&self, report: &Report, technician_id: Option<&str>) -> bool {
        match technician_id.and_then(|id| self.technician(id)) {
            Some(technician) => report.involves(technician),
            None => true,
        }
    }
}
