//! Exchange trait definitions.
//!
//! A scan reads from two kinds of venue: one listing multi-outcome markets
//! with a token per outcome (Polymarket), and one listing a binary market per
//! team (Kalshi).

use async_trait::async_trait;

use crate::domain::{Event, EventTicker, LabeledMarket, OutcomeMarket, Price, TokenId};
use crate::error::Error;

/// A venue whose markets carry one token per outcome.
#[async_trait]
pub trait OutcomeExchange: Send + Sync {
    /// Fetch an event and its markets by slug.
    async fn event_by_slug(&self, slug: &str) -> Result<Event<OutcomeMarket>, Error>;

    /// Best ask for a token.
    async fn best_ask(&self, token_id: &TokenId) -> Result<Price, Error>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}

/// A venue listing one labelled binary market per team.
#[async_trait]
pub trait LabeledExchange: Send + Sync {
    /// Fetch an event together with its markets.
    async fn event_markets(&self, ticker: &EventTicker) -> Result<Event<LabeledMarket>, Error>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}
