//! Polymarket REST API client.
//!
//! Events come from the Gamma API, prices from the CLOB API. Both are plain
//! unauthenticated GETs.

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use super::response::{GammaEvent, PriceResponse};
use crate::adapter::http::{endpoint, JsonClient};
use crate::domain::{DomainError, Event, OutcomeMarket, Price, TokenId};
use crate::error::Result;
use crate::exchange::OutcomeExchange;

/// CLOB book side holding the offers a buyer takes.
const ASK_SIDE: &str = "SELL";

/// HTTP client for the Polymarket Gamma and CLOB APIs.
#[derive(Debug, Clone)]
pub struct PolymarketClient {
    http: JsonClient,
    gamma_url: Url,
    clob_url: Url,
}

impl PolymarketClient {
    /// Create a client against the given API roots.
    ///
    /// # Arguments
    ///
    /// * `gamma_url` - Gamma API root (e.g., `https://gamma-api.polymarket.com`)
    /// * `clob_url` - CLOB API root (e.g., `https://clob.polymarket.com`)
    #[must_use]
    pub fn new(gamma_url: Url, clob_url: Url) -> Self {
        Self {
            http: JsonClient::new(),
            gamma_url,
            clob_url,
        }
    }

    fn price_url(&self, token_id: &TokenId) -> Url {
        let mut url = endpoint(&self.clob_url, &["price"]);
        url.query_pairs_mut()
            .append_pair("token_id", token_id.as_str())
            .append_pair("side", ASK_SIDE);
        url
    }
}

#[async_trait]
impl OutcomeExchange for PolymarketClient {
    async fn event_by_slug(&self, slug: &str) -> Result<Event<OutcomeMarket>> {
        let url = endpoint(&self.gamma_url, &["events", "slug", slug]);
        info!(url = %url, "Fetching Polymarket event");

        let event: GammaEvent = self.http.get(&url).await?;
        let event = event.into_event();
        debug!(count = event.markets().len(), "Fetched Polymarket markets");

        Ok(event)
    }

    /// The price to buy `token_id` now, i.e. the resting `SELL` side.
    async fn best_ask(&self, token_id: &TokenId) -> Result<Price> {
        let url = self.price_url(token_id);
        debug!(url = %url, "Fetching Polymarket price");

        let response: PriceResponse = self.http.get(&url).await?;
        response.price().ok_or_else(|| {
            DomainError::InvalidPrice {
                token_id: token_id.to_string(),
                raw: response.price.to_string(),
            }
            .into()
        })
    }

    fn exchange_name(&self) -> &'static str {
        "Polymarket"
    }
}
