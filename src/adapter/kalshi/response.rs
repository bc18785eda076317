//! Kalshi trade API response types.
//!
//! Prices arrive as dollar strings (`"0.52"`). With `with_nested_markets=true`
//! the markets sit under `event.markets`; older responses put them at the top
//! level instead.

use serde::Deserialize;

use crate::domain::{parse_price, DomainError, Event, EventTicker, LabeledMarket, Venue};

/// Response of `GET /events/{event_ticker}`.
#[derive(Debug, Deserialize)]
pub struct KalshiEventResponse {
    #[serde(default)]
    pub event: Option<KalshiEvent>,
    #[serde(default)]
    pub markets: Option<Vec<KalshiMarket>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KalshiEvent {
    pub title: Option<String>,
    pub markets: Option<Vec<KalshiMarket>>,
}

/// One binary market of an event, usually one per team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KalshiMarket {
    pub ticker: String,
    pub title: Option<String>,
    /// Label of the yes side, e.g. `Green Bay`.
    pub yes_sub_title: Option<String>,
    pub yes_ask_dollars: Option<String>,
    pub yes_bid_dollars: Option<String>,
    pub no_ask_dollars: Option<String>,
    pub no_bid_dollars: Option<String>,
}

impl KalshiMarket {
    fn into_market(self) -> LabeledMarket {
        let price = |raw: Option<String>| raw.as_deref().and_then(parse_price);
        LabeledMarket {
            ticker: self.ticker,
            title: self.title,
            yes_label: self.yes_sub_title,
            yes_ask: price(self.yes_ask_dollars),
            yes_bid: price(self.yes_bid_dollars),
            no_ask: price(self.no_ask_dollars),
            no_bid: price(self.no_bid_dollars),
        }
    }
}

impl KalshiEventResponse {
    /// Convert into the domain event.
    ///
    /// Nested markets win when non-empty; otherwise the top-level list is
    /// used. A missing or `null` event only costs the title.
    ///
    /// # Errors
    ///
    /// [`DomainError::NoVenueMarkets`] when neither list has a market.
    pub fn into_event(self, ticker: &EventTicker) -> Result<Event<LabeledMarket>, DomainError> {
        let event = self.event.unwrap_or_default();
        let nested = event.markets.unwrap_or_default();
        let markets = if nested.is_empty() {
            self.markets.unwrap_or_default()
        } else {
            nested
        };

        if markets.is_empty() {
            return Err(DomainError::NoVenueMarkets {
                ticker: ticker.to_string(),
            });
        }

        let markets = markets.into_iter().map(KalshiMarket::into_market).collect();
        Ok(Event::new(Venue::Kalshi, event.title, markets))
    }
}
