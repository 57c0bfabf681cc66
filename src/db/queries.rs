use crate::errors::AppResult;
use crate::models::{NewShiftRecord, ShiftRecord};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<ShiftRecord> {
    Ok(ShiftRecord {
        id: row.get("id")?,
        employee_name: row.get("employee_name")?,
        date: row.get("date")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        rotation: row.get("rotation")?,
        total_hours: row.get("total_hours")?,
        comment: row.get::<_, Option<String>>("comment")?.unwrap_or_default(),
    })
}

pub fn insert_record(conn: &Connection, rec: &NewShiftRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO shift_changes (employee_name, date, start_time, end_time, rotation, total_hours, comment)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rec.employee_name,
            rec.date,
            rec.start_time,
            rec.end_time,
            rec.rotation,
            rec.total_hours,
            rec.comment,
        ],
    )?;
    Ok(())
}

/// Load records matching the search filters.
///
/// A non-empty employee filter matches case-sensitive substring containment
/// (instr, not LIKE: LIKE would be case-insensitive and would treat `%`/`_`
/// in the input as wildcards). A non-empty date filter matches exactly.
/// Both empty returns every row.
pub fn search_records(
    conn: &Connection,
    employee_filter: &str,
    date_filter: &str,
) -> AppResult<Vec<ShiftRecord>> {
    let mut query = String::from("SELECT * FROM shift_changes WHERE 1=1");
    let mut filters: Vec<String> = Vec::new();

    if !employee_filter.is_empty() {
        query.push_str(" AND instr(employee_name, ?) > 0");
        filters.push(employee_filter.to_string());
    }
    if !date_filter.is_empty() {
        query.push_str(" AND date = ?");
        filters.push(date_filter.to_string());
    }
    query.push_str(" ORDER BY date DESC, start_time ASC");

    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(filters.iter()), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
