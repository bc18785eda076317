//! Price quotes and per-team quote books.

use serde::Serialize;

use super::ids::TokenId;
use super::money::Price;
use super::venue::{Side, Venue};

/// Best ask for one side of one team's contract on one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    pub venue: Venue,
    pub side: Side,
    pub ask: Price,
    /// Polymarket token bought to take this side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_id: Option<TokenId>,
}

impl PriceQuote {
    #[must_use]
    pub const fn new(venue: Venue, side: Side, ask: Price) -> Self {
        Self {
            venue,
            side,
            ask,
            token_id: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token_id: TokenId) -> Self {
        self.token_id = Some(token_id);
        self
    }
}

/// All quotes gathered for one team across venues.
#[derive(Debug, Clone, Serialize)]
pub struct TeamBook {
    team: String,
    quotes: Vec<PriceQuote>,
}

impl TeamBook {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            quotes: Vec::new(),
        }
    }

    /// Add a quote, replacing any earlier one for the same venue and side.
    pub fn insert(&mut self, quote: PriceQuote) {
        self.quotes
            .retain(|q| !(q.venue == quote.venue && q.side == quote.side));
        self.quotes.push(quote);
    }

    /// Add a quote when a price is known.
    pub fn insert_ask(&mut self, venue: Venue, side: Side, ask: Option<Price>) {
        if let Some(ask) = ask {
            self.insert(PriceQuote::new(venue, side, ask));
        }
    }

    #[must_use]
    pub fn team(&self) -> &str {
        &self.team
    }

    #[must_use]
    pub fn quote(&self, venue: Venue, side: Side) -> Option<&PriceQuote> {
        self.quotes
            .iter()
            .find(|q| q.venue == venue && q.side == side)
    }

    #[must_use]
    pub fn quotes(&self) -> &[PriceQuote] {
        &self.quotes
    }
}
