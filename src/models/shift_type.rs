//! Shift classification types.
//!
//! [`ShiftType`] is the classification a report carries. [`DayStatus`] is
//! the effective classification of one technician's day once the reports
//! for that day have been aggregated, which adds the synthesized `Assente`
//! status for active technicians who filed nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The classification of a report's day.
///
/// Labels match the technician app exactly, including `"104"` for leave
/// granted under Law 104/1992.
///
/// # Example
///
/// ```
/// use riso_hours::models::ShiftType;
///
/// assert!(ShiftType::Ferie.is_absence());
/// assert!(!ShiftType::Straordinaria.is_absence());
/// assert_eq!(serde_json::to_string(&ShiftType::Legge104).unwrap(), "\"104\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Ordinary working day.
    Ordinaria,
    /// Overtime shift.
    Straordinaria,
    /// Work on a public holiday.
    Festiva,
    /// Holiday leave.
    Ferie,
    /// Short leave.
    Permesso,
    /// Sick leave.
    Malattia,
    /// Leave under Law 104/1992.
    #[serde(rename = "104")]
    Legge104,
}

impl ShiftType {
    /// Every shift type, in declaration order.
    pub const ALL: [ShiftType; 7] = [
        ShiftType::Ordinaria,
        ShiftType::Straordinaria,
        ShiftType::Festiva,
        ShiftType::Ferie,
        ShiftType::Permesso,
        ShiftType::Malattia,
        ShiftType::Legge104,
    ];

    /// Returns true for whole-day absence categories.
    pub fn is_absence(self) -> bool {
        matches!(
            self,
            ShiftType::Ferie | ShiftType::Permesso | ShiftType::Malattia | ShiftType::Legge104
        )
    }

    /// Returns true for the shift types that take display precedence over
    /// `Ordinaria` when a technician appears in several reports on one day.
    pub fn overrides_ordinary(self) -> bool {
        matches!(self, ShiftType::Straordinaria | ShiftType::Festiva)
    }

    /// The label used by the technician app.
    pub fn as_str(self) -> &'static str {
        match self {
            ShiftType::Ordinaria => "Ordinaria",
            ShiftType::Straordinaria => "Straordinaria",
            ShiftType::Festiva => "Festiva",
            ShiftType::Ferie => "Ferie",
            ShiftType::Permesso => "Permesso",
            ShiftType::Malattia => "Malattia",
            ShiftType::Legge104 => "104",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown shift type: {}", s))
    }
}

/// The effective status of one technician on one day.
///
/// Serialized as a plain label so it can key JSON maps, e.g. the monthly
/// absence-day counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayStatus {
    /// The day is classified by a report's shift type.
    Shift(ShiftType),
    /// An active technician with no report for the day.
    Assente,
}

impl DayStatus {
    const ASSENTE: &'static str = "Assente";

    /// Returns true for explicit absence categories. `Assente` is not one.
    pub fn is_absence(self) -> bool {
        matches!(self, DayStatus::Shift(t) if t.is_absence())
    }

    /// Returns true when the day counts in the monthly absence tally:
    /// explicit absences and `Assente`.
    pub fn counts_as_absence_day(self) -> bool {
        self == DayStatus::Assente || self.is_absence()
    }

    /// The label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            DayStatus::Shift(t) => t.as_str(),
            DayStatus::Assente => Self::ASSENTE,
        }
    }
}

impl From<ShiftType> for DayStatus {
    fn from(shift_type: ShiftType) -> Self {
        DayStatus::Shift(shift_type)
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ASSENTE {
            Ok(DayStatus::Assente)
        } else {
            s.parse().map(DayStatus::Shift)
        }
    }
}

impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DayStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_absence_types() {
        let absences: Vec<_> = ShiftType::ALL
            .into_iter()
            .filter(|t| t.is_absence())
            .collect();
        assert_eq!(
            absences,
            vec![
                ShiftType::Ferie,
                ShiftType::Permesso,
                ShiftType::Malattia,
                ShiftType::Legge104
            ]
        );
    }

    #[test]
    fn test_overrides_ordinary() {
        assert!(ShiftType::Straordinaria.overrides_ordinary());
        assert!(ShiftType::Festiva.overrides_ordinary());
        assert!(!ShiftType::Ordinaria.overrides_ordinary());
        assert!(!ShiftType::Ferie.overrides_ordinary());
    }

    #[test]
    fn test_shift_type_deserialization() {
        let t: ShiftType = serde_json::from_str("\"104\"").unwrap();
        assert_eq!(t, ShiftType::Legge104);
        let t: ShiftType = serde_json::from_str("\"Festiva\"").unwrap();
        assert_eq!(t, ShiftType::Festiva);
        assert!(serde_json::from_str::<ShiftType>("\"Legge104\"").is_err());
    }

    #[test]
    fn test_shift_type_from_str_matches_labels() {
        for t in ShiftType::ALL {
            assert_eq!(t.as_str().parse::<ShiftType>().unwrap(), t);
        }
        assert!("Assente".parse::<ShiftType>().is_err());
    }

    #[test]
    fn test_day_status_labels() {
        assert_eq!(DayStatus::Assente.to_string(), "Assente");
        assert_eq!(DayStatus::from(ShiftType::Malattia).to_string(), "Malattia");
        assert_eq!("Assente".parse::<DayStatus>().unwrap(), DayStatus::Assente);
        assert_eq!(
            "104".parse::<DayStatus>().unwrap(),
            DayStatus::Shift(ShiftType::Legge104)
        );
    }

    #[test]
    fn test_day_status_absence_predicates() {
        assert!(!DayStatus::Assente.is_absence());
        assert!(DayStatus::Assente.counts_as_absence_day());
        assert!(DayStatus::Shift(ShiftType::Permesso).counts_as_absence_day());
        assert!(!DayStatus::Shift(ShiftType::Ordinaria).counts_as_absence_day());
    }

    #[test]
    fn test_day_status_as_json_map_key() {
        let mut counts = BTreeMap::new();
        counts.insert(DayStatus::Assente, 2u32);
        counts.insert(DayStatus::Shift(ShiftType::Ferie), 1u32);

        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"Ferie":1,"Assente":2}"#);

        let back: BTreeMap<DayStatus, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
