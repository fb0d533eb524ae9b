//! HTTP API module for the hours engine.
//!
//! This module exposes the daily and monthly hours, overlap warnings,
//! dashboard counters, report import and the sync payload over REST.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ImportRequest, StatsQuery, TechnicianQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
