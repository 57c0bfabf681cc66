use crate::errors::AppError;

/// An HTTP response independent of the server backend, so handlers can be
/// exercised directly in tests.
#[derive(Debug)]
pub struct Reply {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn html(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![(
                "Content-Type".to_string(),
                "text/html; charset=utf-8".to_string(),
            )],
            body,
        }
    }

    /// 303 redirect with an empty body.
    pub fn see_other(location: &str) -> Self {
        Self {
            status: 303,
            headers: vec![("Location".to_string(), location.to_string())],
            body: Vec::new(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: b"404 Not Found".to_vec(),
        }
    }

    /// Default failure response for an error that aborted the request.
    pub fn server_error(err: &AppError) -> Self {
        Self {
            status: 500,
            headers: vec![(
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            )],
            body: err.to_string().into_bytes(),
        }
    }

    /// First value of a header, if present.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
