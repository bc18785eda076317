//! Kalshi trade API client.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use super::response::KalshiEventResponse;
use crate::adapter::http::{endpoint, JsonClient};
use crate::domain::{Event, EventTicker, LabeledMarket};
use crate::error::Result;
use crate::exchange::LabeledExchange;

/// HTTP client for the public Kalshi trade API.
#[derive(Debug, Clone)]
pub struct KalshiClient {
    http: JsonClient,
    base_url: Url,
}

impl KalshiClient {
    /// Create a client against the given API root
    /// (e.g., `https://api.elections.kalshi.com/trade-api/v2`).
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: JsonClient::new(),
            base_url,
        }
    }

    fn event_url(&self, ticker: &EventTicker) -> Url {
        let mut url = endpoint(&self.base_url, &["events", ticker.as_str()]);
        url.query_pairs_mut()
            .append_pair("with_nested_markets", "true");
        url
    }
}

#[async_trait]
impl LabeledExchange for KalshiClient {
    async fn event_markets(&self, ticker: &EventTicker) -> Result<Event<LabeledMarket>> {
        let url = self.event_url(ticker);
        info!(url = %url, "Fetching Kalshi event");

        let response: KalshiEventResponse = self.http.get(&url).await?;
        let event = response.into_event(ticker)?;
        debug!(count = event.markets().len(), "Fetched Kalshi markets");

        Ok(event)
    }

    fn exchange_name(&self) -> &'static str {
        "Kalshi"
    }
}
