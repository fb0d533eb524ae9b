//! Hours aggregation for the report engine.
//!
//! This module contains the time arithmetic (parsing `HH:MM`, merging
//! technician windows and detecting overlaps), the daily aggregator with its
//! status resolution and overtime split, the monthly roll-up, overlap
//! warnings and the dashboard counters. Every aggregator is a pure function
//! of a [`Snapshot`](crate::store::Snapshot).

mod collation;
mod daily_hours;
mod daily_overtime;
mod monthly_hours;
mod overlap_warnings;
mod statistics;
mod time_slots;

#[cfg(test)]
mod test_support;

pub use collation::compare_it;
pub use daily_hours::calculate_daily_hours;
pub use daily_overtime::{DEFAULT_DAILY_OVERTIME_THRESHOLD, OvertimeSplit, split_daily_overtime};
pub use monthly_hours::{calculate_monthly_hours, days_in_month};
pub use overlap_warnings::get_overlap_warnings;
pub use statistics::{calculate_stats, report_duration_hours, start_of_week};
pub use time_slots::{
    MINUTES_PER_DAY, MergedSlots, TimeSlot, merge_time_slots, minutes_to_time, time_to_minutes,
};
