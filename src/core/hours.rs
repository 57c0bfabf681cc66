//! Duration computation between two HH:MM clock times.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate, NaiveTime};

fn parse_time(t: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Compute the total number of hours between two HH:MM strings.
///
/// If the end time is not after the start time the interval is taken to
/// cross midnight, so equal start and end count as a full 24-hour shift.
/// The result is rounded to 2 decimal places.
pub fn compute_total_hours(start_time: &str, end_time: &str) -> AppResult<f64> {
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;

    // Anchor both on an arbitrary common date.
    let day = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid reference date");
    let start_dt = day.and_time(start);
    let mut end_dt = day.and_time(end);
    if end <= start {
        end_dt = end_dt
            .checked_add_days(Days::new(1))
            .expect("reference date + 1 day is in range");
    }

    let secs = (end_dt - start_dt).num_seconds() as f64;
    let hours = secs / 3600.0;
    Ok((hours * 100.0).round() / 100.0)
}
