//! Request types for the hours engine API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Report;

/// Request body for `POST /reports/import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    /// Reports received from the technician app.
    pub reports: Vec<Report>,
}

/// Query string for the monthly hours endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TechnicianQuery {
    /// Restrict results to one technician.
    pub technician_id: Option<String>,
}

/// Query string for `GET /stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// Restrict counters to one technician.
    pub technician_id: Option<String>,
    /// Reference day; defaults to the server's local date.
    pub today: Option<NaiveDate>,
}
