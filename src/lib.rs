//! shiftlogger library root.
//! Exposes configuration, high-level run() function, and internal modules.

pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod http;
pub mod models;
pub mod render;

use config::Config;
use errors::AppResult;
use http::App;

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    env_logger::init();

    let cfg = Config::load();

    // Schema is guaranteed once at startup; request handlers only open
    // short-lived connections for their single read or write.
    let conn = db::open(&cfg.database)?;
    db::initialize::init_db(&conn)?;
    drop(conn);

    let app = App::new(cfg);
    app.serve()
}
