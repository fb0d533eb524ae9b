//! Daily ordinary/overtime split.
//!
//! A technician's merged hours for a day are split at a flat daily
//! threshold. There are no weekly or contractual rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours split into the ordinary and overtime buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub ordinary_hours: Decimal,
    /// Hours beyond the threshold.
    pub overtime_hours: Decimal,
}

/// Ordinary hours per day.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Splits a day's worked hours at `threshold`.
///
/// Hours at or under the threshold are all ordinary; above it, ordinary is
/// capped at the threshold and the rest is overtime.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::{split_daily_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_daily_overtime(Decimal::from_str("9.5").unwrap(), DEFAULT_DAILY_OVERTIME_THRESHOLD);
/// assert_eq!(split.ordinary_hours, Decimal::from(8));
/// assert_eq!(split.overtime_hours, Decimal::from_str("1.5").unwrap());
/// ```
pub fn split_daily_overtime(worked_hours: Decimal, threshold: Decimal) -> OvertimeSplit {
    if worked_hours <= threshold {
        OvertimeSplit {
            ordinary_hours: worked_hours,
            overtime_hours: Decimal::ZERO,
        }
    } else {
        OvertimeSplit {
            ordinary_hours: threshold,
            overtime_hours: worked_hours - threshold,
        }
    }
}
