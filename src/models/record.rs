use serde::Serialize;

/// A shift-change row as stored in the database.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecord {
    pub id: i64,
    pub employee_name: String, // trimmed on entry
    pub date: String,          // "YYYY-MM-DD", not validated
    pub start_time: String,    // "HH:MM"
    pub end_time: String,      // "HH:MM"
    pub rotation: String,      // free-form label (day/night/...)
    pub total_hours: f64,      // derived at insert, never recomputed
    pub comment: String,
}

/// Fields of a record before the database assigns its id.
#[derive(Debug, Clone, Serialize)]
pub struct NewShiftRecord {
    pub employee_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub rotation: String,
    pub total_hours: f64,
    pub comment: String,
}

impl ShiftRecord {
    /// total_hours as shown in the results table, two decimal places.
    pub fn total_hours_str(&self) -> String {
        format!("{:.2}", self.total_hours)
    }
}
