use std::fmt;

use async_trait::async_trait;
use reqwest::Url;

use crate::utilities::api_utils::{DetectServerError, ServerError};

/// Everything that can go wrong between building a request URL and holding a decoded value.
///
/// The public client operations never return this; it only reaches the log and custom
/// [`Transport`] implementations.
#[derive(Debug)]
pub enum RequestError {
    Network(reqwest::Error),
    Server(ServerError),
    Url(url::ParseError),
    Decode(serde_json::Error),
    Unsuccessful(Option<String>),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(err) => write!(f, "network error: {err}"),
            Self::Server(err) => write!(f, "{err}"),
            Self::Url(err) => write!(f, "invalid request url: {err}"),
            Self::Decode(err) => write!(f, "malformed response: {err}"),
            Self::Unsuccessful(Some(kind)) => write!(f, "response type was {kind:?}"),
            Self::Unsuccessful(None) => write!(f, "response has no type"),
        }
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

impl From<ServerError> for RequestError {
    fn from(value: ServerError) -> Self {
        Self::Server(value)
    }
}

impl From<url::ParseError> for RequestError {
    fn from(value: url::ParseError) -> Self {
        Self::Url(value)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Performs a single GET and hands back the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<String, RequestError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn get(&self, url: Url) -> Result<String, RequestError> {
        // error envelopes may come with a 4xx status, so the body is read regardless
        let body = Self::get(self, url).send().await?.server_error()?.text().await?;

        Ok(body)
    }
}
