//! Builders shared by the calculation tests.

use chrono::NaiveDate;

use crate::models::{Report, ReportTechnician, ShiftType, Technician};

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn technician(id: &str, name: &str, user_id: &str) -> Technician {
    Technician {
        id: id.to_string(),
        name: name.to_string(),
        email: None,
        phone: None,
        active: true,
        user_id: user_id.to_string(),
        category: None,
    }
}

pub fn roster() -> Vec<Technician> {
    vec![
        technician("tech1", "Marco Rossi", "T001"),
        technician("tech2", "Luca Bianchi", "T002"),
        technician("tech3", "Paolo Verdi", "T003"),
    ]
}

pub fn window(id: &str, name: &str, start: &str, end: &str) -> ReportTechnician {
    ReportTechnician {
        id: id.to_string(),
        name: name.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

pub fn worked(
    id: &str,
    day: &str,
    shift_type: ShiftType,
    ship: &str,
    technicians: Vec<ReportTechnician>,
) -> Report {
    let (start, end) = technicians
        .first()
        .map(|t| (t.start_time.clone(), t.end_time.clone()))
        .unwrap_or_else(|| ("08:00".to_string(), "17:00".to_string()));
    Report {
        id: id.to_string(),
        date: date(day),
        shift_type,
        start_time: start,
        end_time: end,
        pause_minutes: 0,
        ship: ship.to_string(),
        location: "Porto di Genova".to_string(),
        description: String::new(),
        materials: String::new(),
        work_done: String::new(),
        technicians,
        created_at: 0,
        updated_at: 0,
        user_id: None,
        synced_at: None,
        version: None,
        device_id: None,
    }
}

pub fn absence(id: &str, day: &str, shift_type: ShiftType, user_id: &str) -> Report {
    let mut report = worked(id, day, shift_type, "", vec![]);
    report.user_id = Some(user_id.to_string());
    report
}
