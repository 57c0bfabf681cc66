pub mod initialize;
pub mod queries;

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// Open a fresh connection to the database file.
/// Each request opens its own connection and drops it when done.
pub fn open(path: &str) -> AppResult<Connection> {
    let conn = Connection::open(Path::new(path))?;
    Ok(conn)
}
