use std::time::Duration;

use reqwest::{Client, Url};

pub const DEFAULT_BASE_URL: &str = "https://api.icndb.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone, Debug)]
pub struct Config {
    /// Root every endpoint path is joined onto.
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl Config {
    /// Builds the HTTP client used as the default transport.
    ///
    /// # Errors
    ///
    /// Fails if reqwest cannot initialize its TLS backend.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        let mut http_client = Client::builder();

        if let Some(user_agent) = &self.user_agent {
            http_client = http_client.user_agent(user_agent);
        }

        http_client.timeout(self.timeout).build()
    }
}
