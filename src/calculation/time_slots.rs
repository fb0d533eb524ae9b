//! Wall-clock parsing and time-slot merging.
//!
//! A technician can appear in several reports on the same day (two ships,
//! say). Worked time is the union of those windows, so overlapping minutes
//! are counted once and every overlap is reported back as a warning.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in a day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// One window, in minutes from 00:00 of the day it starts on.
///
/// `end` is already past `start` for windows that cross midnight, e.g.
/// 22:00-02:00 is `1320..1560`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start minute.
    pub start: u32,
    /// End minute.
    pub end: u32,
    /// The report the window came from.
    pub report_id: String,
}

impl TimeSlot {
    /// Builds a slot from `HH:MM` strings, moving `end` to the next day
    /// when it is earlier than `start`.
    ///
    /// # Example
    ///
    /// ```
    /// use riso_hours::calculation::TimeSlot;
    ///
    /// let slot = TimeSlot::from_window("22:00", "02:00", "r1").unwrap();
    /// assert_eq!((slot.start, slot.end), (1320, 1560));
    /// assert_eq!(slot.minutes(), 240);
    /// ```
    pub fn from_window(
        start_time: &str,
        end_time: &str,
        report_id: impl Into<String>,
    ) -> EngineResult<Self> {
        let start = time_to_minutes(start_time, false)?;
        let mut end = time_to_minutes(end_time, false)?;
        if end < start {
            end += MINUTES_PER_DAY;
        }
        Ok(Self {
            start,
            end,
            report_id: report_id.into(),
        })
    }

    /// Length of the slot in minutes.
    pub fn minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// The result of merging a technician's slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedSlots {
    /// Minutes covered by at least one slot.
    pub total_minutes: u32,
    /// One message per slot that overlapped the interval before it.
    pub overlaps: Vec<String>,
}

/// Parses `HH:MM` into minutes since 00:00.
///
/// With `crosses_midnight` the value is placed on the following day by
/// adding [`MINUTES_PER_DAY`].
///
/// # Errors
///
/// [`EngineError::InvalidTime`] unless the input is two numeric fields
/// separated by a colon, with hours below 24 and minutes below 60.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::time_to_minutes;
///
/// assert_eq!(time_to_minutes("08:30", false).unwrap(), 510);
/// assert_eq!(time_to_minutes("02:00", true).unwrap(), 1560);
/// assert!(time_to_minutes("8.30", false).is_err());
/// ```
pub fn time_to_minutes(time: &str, crosses_midnight: bool) -> EngineResult<u32> {
    let invalid = |message: &str| EngineError::InvalidTime {
        value: time.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = time
        .trim()
        .split_once(':')
        .ok_or_else(|| invalid("expected HH:MM"))?;
    let hours: u32 = hours.parse().map_err(|_| invalid("hours are not a number"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| invalid("minutes are not a number"))?;

    if hours >= 24 {
        return Err(invalid("hours must be below 24"));
    }
    if minutes >= 60 {
        return Err(invalid("minutes must be below 60"));
    }

    let total = hours * 60 + minutes;
    Ok(if crosses_midnight {
        total + MINUTES_PER_DAY
    } else {
        total
    })
}

/// Formats minutes as zero-padded `HH:MM`.
///
/// Hours are not wrapped: 1560 formats as `26:00`. Normalise first when a
/// same-day clock reading is wanted.
pub fn minutes_to_time(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Merges slots into their union and reports each overlap.
///
/// Slots are swept in start order. A slot that starts before the open
/// interval ends is folded into it and produces
/// `"Accavallamento orari: <start> - <end>"` naming the shared range; any
/// other slot opens a new interval. The total is the sum of the disjoint
/// intervals, so overlapping minutes count once.
///
/// # Examples
///
/// ```
/// use riso_hours::calculation::{merge_time_slots, TimeSlot};
///
/// let slots = vec![
///     TimeSlot { start: 480, end: 720, report_id: "a".into() },
///     TimeSlot { start: 600, end: 780, report_id: "b".into() },
/// ];
/// let merged = merge_time_slots(&slots);
/// assert_eq!(merged.total_minutes, 300);
/// assert_eq!(merged.overlaps, vec!["Accavallamento orari: 10:00 - 12:00"]);
/// ```
pub fn merge_time_slots(slots: &[TimeSlot]) -> MergedSlots {
    match slots {
        [] => return MergedSlots::default(),
        [only] => {
            return MergedSlots {
                total_minutes: only.minutes(),
                overlaps: Vec::new(),
            };
        }
        _ => {}
    }

    let mut sorted: Vec<&TimeSlot> = slots.iter().collect();
    sorted.sort_by_key(|slot| slot.start);

    let mut overlaps = Vec::new();
    let mut total_minutes = 0;
    let (mut start, mut end) = (sorted[0].start, sorted[0].end);

    for next in &sorted[1..] {
        if next.start < end {
            overlaps.push(format!(
                "Accavallamento orari: {} - {}",
                minutes_to_time(next.start.max(start)),
                minutes_to_time(next.end.min(end))
            ));
            end = end.max(next.end);
        } else {
            total_minutes += end.saturating_sub(start);
            (start, end) = (next.start, next.end);
        }
    }
    total_minutes += end.saturating_sub(start);

    MergedSlots {
        total_minutes,
        overlaps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slot(start: u32, end: u32) -> TimeSlot {
        TimeSlot {
            start,
            end,
            report_id: format!("r{}", start),
        }
    }

    #[test]
    fn test_time_to_minutes() {
        assert_eq!(time_to_minutes("00:00", false).unwrap(), 0);
        assert_eq!(time_to_minutes("08:00", false).unwrap(), 480);
        assert_eq!(time_to_minutes("23:59", false).unwrap(), 1439);
        assert_eq!(time_to_minutes("7:05", false).unwrap(), 425);
    }

    #[test]
    fn test_time_to_minutes_crossing_midnight() {
        assert_eq!(time_to_minutes("02:00", true).unwrap(), 1560);
        assert_eq!(time_to_minutes("00:00", true).unwrap(), 1440);
    }

    #[test]
    fn test_time_to_minutes_rejects_malformed_input() {
        for bad in ["", "0800", "8.00", "ab:cd", "08:xx", "24:00", "08:60", "08:00:00"] {
            let result = time_to_minutes(bad, false);
            assert!(
                matches!(result, Err(EngineError::InvalidTime { .. })),
                "expected InvalidTime for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_minutes_to_time() {
        assert_eq!(minutes_to_time(0), "00:00");
        assert_eq!(minutes_to_time(605), "10:05");
        assert_eq!(minutes_to_time(1439), "23:59");
        assert_eq!(minutes_to_time(1560), "26:00");
    }

    #[test]
    fn test_from_window_same_day() {
        let s = TimeSlot::from_window("08:00", "12:00", "r1").unwrap();
        assert_eq!((s.start, s.end), (480, 720));
        assert_eq!(s.report_id, "r1");
    }

    #[test]
    fn test_from_window_crossing_midnight() {
        let s = TimeSlot::from_window("22:00", "02:00", "r1").unwrap();
        assert_eq!((s.start, s.end), (1320, 1560));
        assert_eq!(s.minutes(), 240);
    }

    #[test]
    fn test_from_window_propagates_parse_errors() {
        assert!(TimeSlot::from_window("08:00", "noon", "r1").is_err());
    }

    #[test]
    fn test_merge_empty() {
        let merged = merge_time_slots(&[]);
        assert_eq!(merged.total_minutes, 0);
        assert!(merged.overlaps.is_empty());
    }

    #[test]
    fn test_merge_single_slot() {
        let merged = merge_time_slots(&[slot(480, 720)]);
        assert_eq!(merged.total_minutes, 240);
        assert!(merged.overlaps.is_empty());
    }

    #[test]
    fn test_merge_overlapping_slots() {
        let merged = merge_time_slots(&[slot(480, 720), slot(600, 780)]);
        assert_eq!(merged.total_minutes, 300);
        assert_eq!(merged.overlaps, vec!["Accavallamento orari: 10:00 - 12:00"]);
    }

    #[test]
    fn test_merge_disjoint_slots() {
        let merged = merge_time_slots(&[slot(480, 600), slot(720, 840)]);
        assert_eq!(merged.total_minutes, 240);
        assert!(merged.overlaps.is_empty());
    }

    #[test]
    fn test_merge_touching_slots_do_not_overlap() {
        let merged = merge_time_slots(&[slot(480, 720), slot(720, 840)]);
        assert_eq!(merged.total_minutes, 360);
        assert!(merged.overlaps.is_empty());
    }

    #[test]
    fn test_merge_unsorted_input() {
        let merged = merge_time_slots(&[slot(660, 1020), slot(480, 720)]);
        assert_eq!(merged.total_minutes, 540);
        assert_eq!(merged.overlaps, vec!["Accavallamento orari: 11:00 - 12:00"]);
    }

    #[test]
    fn test_merge_contained_slot() {
        let merged = merge_time_slots(&[slot(480, 1020), slot(600, 660)]);
        assert_eq!(merged.total_minutes, 540);
        assert_eq!(merged.overlaps, vec!["Accavallamento orari: 10:00 - 11:00"]);
    }

    #[test]
    fn test_merge_chain_reports_each_overlap() {
        // 08-12, 11-14, 13-15 collapse into 08-15.
        let merged = merge_time_slots(&[slot(480, 720), slot(660, 840), slot(780, 900)]);
        assert_eq!(merged.total_minutes, 420);
        assert_eq!(
            merged.overlaps,
            vec![
                "Accavallamento orari: 11:00 - 12:00",
                "Accavallamento orari: 13:00 - 14:00"
            ]
        );
    }

    #[test]
    fn test_merge_across_midnight() {
        let evening = TimeSlot::from_window("22:00", "02:00", "a").unwrap();
        let late = TimeSlot::from_window("23:00", "01:00", "b").unwrap();
        let merged = merge_time_slots(&[evening, late]);
        assert_eq!(merged.total_minutes, 240);
        assert_eq!(merged.overlaps, vec!["Accavallamento orari: 23:00 - 25:00"]);
    }

    proptest! {
        #[test]
        fn prop_union_bounded_by_sum_and_longest(
            raw in prop::collection::vec((0u32..1440, 0u32..720), 0..8)
        ) {
            let slots: Vec<TimeSlot> = raw.iter().map(|&(s, len)| slot(s, s + len)).collect();
            let merged = merge_time_slots(&slots);

            let sum: u32 = slots.iter().map(TimeSlot::minutes).sum();
            let longest = slots.iter().map(TimeSlot::minutes).max().unwrap_or(0);

            prop_assert!(merged.total_minutes <= sum);
            prop_assert!(merged.total_minutes >= longest);
        }

        #[test]
        fn prop_merge_ignores_input_order(
            raw in prop::collection::vec((0u32..1440, 1u32..720), 0..8)
        ) {
            let slots: Vec<TimeSlot> = raw.iter().map(|&(s, len)| slot(s, s + len)).collect();
            let mut reversed = slots.clone();
            reversed.reverse();

            prop_assert_eq!(
                merge_time_slots(&slots).total_minutes,
                merge_time_slots(&reversed).total_minutes
            );
        }

        #[test]
        fn prop_disjoint_slots_sum_without_warnings(
            lengths in prop::collection::vec(1u32..120, 1..8)
        ) {
            let mut cursor = 0;
            let mut slots = Vec::new();
            for len in &lengths {
                slots.push(slot(cursor, cursor + len));
                cursor += len + 1;
            }
            let merged = merge_time_slots(&slots);

            prop_assert_eq!(merged.total_minutes, lengths.iter().sum::<u32>());
            prop_assert!(merged.overlaps.is_empty());
        }
    }
}
