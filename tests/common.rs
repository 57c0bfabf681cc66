#![allow(dead_code)]
use shiftlogger::config::Config;
use shiftlogger::db;
use shiftlogger::http::App;
use std::env;
use std::path::PathBuf;

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    db_path
}

/// The crate's own templates directory, used by handler tests.
pub fn templates_dir() -> String {
    format!("{}/templates", env!("CARGO_MANIFEST_DIR"))
}

/// Build an App over a fresh, initialized test database.
pub fn test_app(name: &str) -> App {
    let db_path = setup_test_db(name);
    let conn = db::open(&db_path).expect("open db");
    db::initialize::init_db(&conn).expect("init db");

    App::new(Config {
        database: db_path,
        port: 0,
        templates_dir: templates_dir(),
    })
}

/// Encode (key, value) pairs as a form body.
pub fn form_body(fields: &[(&str, &str)]) -> Vec<u8> {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in fields {
        ser.append_pair(k, v);
    }
    ser.finish().into_bytes()
}

/// Submit one record through the entry endpoint.
pub fn submit_record(app: &App, employee: &str, date: &str, start: &str, end: &str) {
    let body = form_body(&[
        ("employee_name", employee),
        ("date", date),
        ("start_time", start),
        ("end_time", end),
        ("rotation", "day"),
        ("comment", ""),
    ]);
    let reply = app.handle("POST", "/", &body).expect("insert record");
    assert_eq!(reply.status, 303);
}
