//! Shared JSON-over-HTTP plumbing for the venue clients.
//!
//! One GET per call: no retries, no custom timeouts. A non-2xx status is
//! returned as [`Error::Status`] with the response body attached.

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("gamescan/", env!("CARGO_PKG_VERSION"));

/// Thin GET-and-decode wrapper around a reqwest client.
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: HttpClient,
}

impl JsonClient {
    #[must_use]
    pub fn new() -> Self {
        let http = HttpClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });
        Self { http }
    }

    /// GET `url` and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::Http`] when the request cannot be sent or read,
    /// [`Error::Status`] on a non-success status, [`Error::Json`] when the
    /// body does not decode into `T`.
    pub async fn get<T>(&self, url: &Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "GET");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status {
                status,
                url: url.to_string(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for JsonClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Append path segments to a base URL, percent-encoding each one.
///
/// A trailing slash on the base is ignored, so `https://host/v2/` and
/// `https://host/v2` give the same result.
#[must_use]
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
