use std::fmt::Display;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::envelope;
use crate::random_jokes::RandomJokes;
use crate::transport::{RequestError, Transport};

/// A single joke as the service returns it, fields untouched.
pub type Joke = serde_json::Map<String, serde_json::Value>;

/// ICNDB client.
///
/// Every operation swallows failures: transport errors, malformed bodies and unsuccessful
/// envelopes all come back as `None` (or `0` for [`Client::joke_count`]) and are only
/// reported through the `log` facade.
#[derive(Clone, Debug)]
pub struct Client<T = reqwest::Client> {
    transport: T,
    base_url: Url,
}

impl Client {
    /// Client for the public ICNDB instance with the default [`Config`].
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be built.
    pub fn new() -> reqwest::Result<Self> {
        Self::with_config(Config::default())
    }

    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be built.
    pub fn with_config(config: Config) -> reqwest::Result<Self> {
        Ok(Self::with_transport(config.http_client()?, config.base_url))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self { transport, base_url }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches random jokes, always as a list, even for a single joke.
    pub async fn random_jokes(&self, request: &RandomJokes) -> Option<Vec<Joke>> {
        settle("random jokes", self.fetch_random_jokes(request).await)
    }

    pub async fn all_jokes(&self) -> Option<Vec<Joke>> {
        settle("all jokes", self.fetch("jokes/").await)
    }

    pub async fn categories(&self) -> Option<Vec<String>> {
        settle("categories", self.fetch("categories").await)
    }

    /// Number of jokes in the database, or `0` if it could not be determined.
    pub async fn joke_count(&self) -> i64 {
        let count = self
            .request("jokes/count/")
            .await
            .and_then(|body| envelope::success_value(&body))
            .map(|value| envelope::coerce_integer(&value));

        settle("joke count", count).unwrap_or_default()
    }

    pub async fn joke(&self, id: impl Display) -> Option<Joke> {
        let path = format!("jokes/{id}");
        settle("joke", self.fetch(&path).await)
    }

    async fn fetch_random_jokes(&self, request: &RandomJokes) -> Result<Vec<Joke>, RequestError> {
        // fetched once, shared by both the limitTo and exclude filters
        let known = if request.filters_categories() { self.categories().await } else { None };

        let url = request.url(&self.base_url, known.as_deref())?;
        let body = self.get(url).await?;

        if request.is_single() {
            Ok(vec![envelope::decode::<Joke>(&body)?])
        } else {
            envelope::decode(&body)
        }
    }

    async fn fetch<R: DeserializeOwned>(&self, path: &str) -> Result<R, RequestError> {
        envelope::decode(&self.request(path).await?)
    }

    async fn request(&self, path: &str) -> Result<String, RequestError> {
        self.get(self.base_url.join(path)?).await
    }

    async fn get(&self, url: Url) -> Result<String, RequestError> {
        log::debug!("requesting {url}");
        self.transport.get(url).await
    }
}

fn settle<R>(operation: &str, result: Result<R, RequestError>) -> Option<R> {
    result.inspect_err(|err| log::warn!("icndb {operation} request failed: {err}")).ok()
}
