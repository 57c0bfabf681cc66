//! Synchronous HTTP serving on top of tiny_http.

pub mod form;
pub mod handlers;
pub mod reply;

pub use handlers::App;
pub use reply::Reply;

use crate::errors::{AppError, AppResult};
use log::{error, info};
use tiny_http::{Header, Response, Server};

impl App {
    /// Run the accept loop. Requests are handled one at a time, end to end;
    /// the loop never returns under normal operation.
    pub fn serve(&self) -> AppResult<()> {
        let addr = format!("127.0.0.1:{}", self.config().port);
        let server = Server::http(&addr).map_err(|e| AppError::Http(e.to_string()))?;
        info!("listening on http://{}", addr);

        for mut request in server.incoming_requests() {
            let method = request.method().as_str().to_string();
            // Route on the path only, not the query string.
            let path = request
                .url()
                .split('?')
                .next()
                .unwrap_or("/")
                .to_string();

            let mut body = Vec::new();
            if let Err(e) = request.as_reader().read_to_end(&mut body) {
                error!("{} {} failed reading body: {}", method, path, e);
                body.clear();
            }

            let reply = match self.handle(&method, &path, &body) {
                Ok(reply) => {
                    info!("{} {} -> {}", method, path, reply.status);
                    reply
                }
                Err(e) => {
                    error!("{} {} failed: {}", method, path, e);
                    Reply::server_error(&e)
                }
            };

            let mut response = Response::from_data(reply.body).with_status_code(reply.status);
            for (name, value) in &reply.headers {
                if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
                    response = response.with_header(header);
                }
            }
            if let Err(e) = request.respond(response) {
                error!("failed to send response: {}", e);
            }
        }

        Ok(())
    }
}
