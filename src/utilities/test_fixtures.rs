use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use super::api_utils::ServerError;
use crate::client::Client;
use crate::transport::{RequestError, Transport};

pub const BASE_URL: &str = "https://api.icndb.com/";

enum Reply {
    Body(String),
    ServerError(StatusCode),
}

/// Serves canned bodies keyed by the request's path and query relative to [`BASE_URL`]
/// and remembers every URL it was asked for.
#[derive(Default)]
pub struct FakeTransport {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn reply(mut self, endpoint: &str, body: &str) -> Self {
        self.replies.insert(endpoint.into(), Reply::Body(body.into()));
        self
    }

    pub fn fail(mut self, endpoint: &str, status: StatusCode) -> Self {
        self.replies.insert(endpoint.into(), Reply::ServerError(status));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.requests().iter().filter(|request| *request == endpoint).count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: Url) -> Result<String, RequestError> {
        let endpoint = url.as_str().strip_prefix(BASE_URL).unwrap().to_string();
        self.requests.lock().unwrap().push(endpoint.clone());

        match self.replies.get(&endpoint) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::ServerError(status)) => Err(ServerError(*status).into()),
            None => Err(ServerError(StatusCode::SERVICE_UNAVAILABLE).into()),
        }
    }
}

pub fn client(transport: FakeTransport) -> Client<FakeTransport> {
    Client::with_transport(transport, Url::parse(BASE_URL).unwrap())
}

pub const CATEGORIES: &str = r#"{"type":"success","value":["explicit","nerdy"]}"#;
