use crate::config::Config;
use crate::core::hours::compute_total_hours;
use crate::db;
use crate::errors::AppResult;
use crate::http::form::{EntryForm, SearchForm};
use crate::http::reply::Reply;
use crate::models::NewShiftRecord;
use crate::render::{Context, render_template};
use std::path::Path;

/// The request dispatcher. Holds the configuration; every request opens
/// its own database connection.
pub struct App {
    cfg: Config,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    fn templates_dir(&self) -> &Path {
        Path::new(&self.cfg.templates_dir)
    }

    /// Dispatch a request to its handler.
    pub fn handle(&self, method: &str, path: &str, body: &[u8]) -> AppResult<Reply> {
        match (method, path) {
            ("GET", "/") => self.entry_page(),
            ("POST", "/") => self.record_entry(body),
            ("GET", "/search") => self.search_page(),
            ("POST", "/search") => self.search(body),
            _ => Ok(Reply::not_found()),
        }
    }

    /// GET / : the entry form, no dynamic data.
    fn entry_page(&self) -> AppResult<Reply> {
        let html = render_template(self.templates_dir(), "index.html", &Context::new())?;
        Ok(Reply::html(html))
    }

    /// POST / : insert a record, then redirect back to the form so that a
    /// browser refresh does not resubmit.
    fn record_entry(&self, body: &[u8]) -> AppResult<Reply> {
        let form = EntryForm::from_body(body);

        // A malformed time fails the whole request; nothing is inserted.
        let total_hours = compute_total_hours(&form.start_time, &form.end_time)?;

        let rec = NewShiftRecord {
            employee_name: form.employee_name,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            rotation: form.rotation,
            total_hours,
            comment: form.comment,
        };

        let conn = db::open(&self.cfg.database)?;
        db::queries::insert_record(&conn, &rec)?;

        Ok(Reply::see_other("/"))
    }

    /// GET /search : the search page with an empty result set, no query run.
    fn search_page(&self) -> AppResult<Reply> {
        let mut ctx = Context::new();
        ctx.set_results(Vec::new());
        let html = render_template(self.templates_dir(), "search.html", &ctx)?;
        Ok(Reply::html(html))
    }

    /// POST /search : run the filtered query and render the matching rows.
    fn search(&self, body: &[u8]) -> AppResult<Reply> {
        let form = SearchForm::from_body(body);

        let conn = db::open(&self.cfg.database)?;
        let results = db::queries::search_records(&conn, &form.employee_name, &form.date)?;

        let mut ctx = Context::new();
        ctx.set_results(results);
        let html = render_template(self.templates_dir(), "search.html", &ctx)?;
        Ok(Reply::html(html))
    }
}
