//! Typed views over url-encoded form bodies.
//!
//! A field missing from the body defaults to the empty string; nothing is
//! rejected at this layer. When a field is repeated, the first value wins.

use std::collections::HashMap;

fn parse_body(body: &[u8]) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    for (key, value) in form_urlencoded::parse(body) {
        fields.entry(key.into_owned()).or_insert(value.into_owned());
    }
    fields
}

fn take(fields: &mut HashMap<String, String>, key: &str) -> String {
    fields.remove(key).unwrap_or_default()
}

/// Fields of the record-entry form (POST /).
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub employee_name: String, // trimmed
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub rotation: String,
    pub comment: String, // trimmed
}

impl EntryForm {
    pub fn from_body(body: &[u8]) -> Self {
        let mut fields = parse_body(body);
        Self {
            employee_name: take(&mut fields, "employee_name").trim().to_string(),
            date: take(&mut fields, "date"),
            start_time: take(&mut fields, "start_time"),
            end_time: take(&mut fields, "end_time"),
            rotation: take(&mut fields, "rotation"),
            comment: take(&mut fields, "comment").trim().to_string(),
        }
    }
}

/// Fields of the search form (POST /search). Both are trimmed.
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub employee_name: String,
    pub date: String,
}

impl SearchForm {
    pub fn from_body(body: &[u8]) -> Self {
        let mut fields = parse_body(body);
        Self {
            employee_name: take(&mut fields, "employee_name").trim().to_string(),
            date: take(&mut fields, "date").trim().to_string(),
        }
    }
}
