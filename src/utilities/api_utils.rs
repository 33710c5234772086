use std::fmt;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Response, StatusCode};

/// An upstream 5xx answered with an HTML error page instead of a JSON envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerError(pub StatusCode);

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server error page ({})", self.0)
    }
}

pub trait DetectServerError {
    fn server_error(self) -> Result<Response, ServerError>;
}

impl DetectServerError for Response {
    fn server_error(self) -> Result<Response, ServerError> {
        if self.status().is_server_error() && is_html(&self) {
            return Err(ServerError(self.status()));
        }

        Ok(self)
    }
}

fn is_html(response: &Response) -> bool {
    response.headers().get(CONTENT_TYPE).is_some_and(|header| {
        header.to_str().is_ok_and(|header| header.starts_with("text/html"))
    })
}
