//! Minimal placeholder templating.
//!
//! Templates are plain HTML files with `{{ key }}` tokens. Rendering is
//! literal find-and-replace over the whole file, applied once per key,
//! never recursive, and performs no HTML escaping: values must be
//! pre-sanitized by the caller if they come from untrusted input. Loops,
//! conditionals and nesting are deliberately unsupported.

use crate::errors::AppResult;
use crate::models::ShiftRecord;
use std::fs;
use std::path::Path;

/// Values available to a template.
#[derive(Debug, Default)]
pub struct Context {
    values: Vec<(String, String)>,
    results: Option<Vec<ShiftRecord>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar placeholder value.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.push((key.to_string(), value.into()));
    }

    /// Provide the record list expanded into `{{ results_table }}`.
    pub fn set_results(&mut self, results: Vec<ShiftRecord>) {
        self.results = Some(results);
    }
}

/// Load a template from `dir` and substitute placeholders from `ctx`.
pub fn render_template(dir: &Path, name: &str, ctx: &Context) -> AppResult<Vec<u8>> {
    let mut content = fs::read_to_string(dir.join(name))?;

    for (key, value) in &ctx.values {
        let placeholder = format!("{{{{ {} }}}}", key);
        content = content.replace(&placeholder, value);
    }

    if let Some(results) = &ctx.results {
        content = content.replace("{{ results_table }}", &results_table(results));
    }

    Ok(content.into_bytes())
}

/// Expand records into table rows: seven cells per record, in the column
/// order of the search page, or a single spanning row when there are none.
fn results_table(results: &[ShiftRecord]) -> String {
    if results.is_empty() {
        return "<tr><td colspan='7'>No records found.</td></tr>".to_string();
    }

    let mut rows_html = String::new();
    for rec in results {
        rows_html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            rec.employee_name,
            rec.date,
            rec.start_time,
            rec.end_time,
            rec.rotation,
            rec.total_hours_str(),
            rec.comment,
        ));
    }
    rows_html
}
