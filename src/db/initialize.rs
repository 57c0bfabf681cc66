use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Creates the `shift_changes` table if absent; safe to call repeatedly.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS shift_changes (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT NOT NULL,
            date          TEXT NOT NULL,          -- YYYY-MM-DD
            start_time    TEXT NOT NULL,          -- HH:MM
            end_time      TEXT NOT NULL,          -- HH:MM
            rotation      TEXT NOT NULL,
            total_hours   REAL NOT NULL,
            comment       TEXT
        );
        ",
    )?;
    Ok(())
}
