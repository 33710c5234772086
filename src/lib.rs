//! Client for the Internet Chuck Norris Database (ICNDB) joke API.
//!
//! ```no_run
//! # async fn demo() -> reqwest::Result<()> {
//! let client = icndb::Client::new()?;
//! let request = icndb::RandomJokes::new().quantity(3).exclude(["explicit"]);
//!
//! for joke in client.random_jokes(&request).await.unwrap_or_default() {
//!     println!("{}", joke["joke"]);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod envelope;
mod random_jokes;
mod transport;
mod utilities;

pub use client::{Client, Joke};
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use random_jokes::RandomJokes;
pub use transport::{RequestError, Transport};
pub use url::Url;
pub use utilities::api_utils::ServerError;
