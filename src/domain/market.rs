//! Market-related domain types.
//!
//! - [`Event`] - One venue's view of a sporting event and its markets
//! - [`OutcomeMarket`] - A Polymarket market: outcome labels paired with tokens
//! - [`LabeledMarket`] - A Kalshi market: one team-labelled binary contract
//! - [`Outcome`] - A single tradeable outcome within a Polymarket market

use rust_decimal::Decimal;
use serde::Serialize;

use super::ids::TokenId;
use super::venue::Venue;

/// A venue's event with its markets in response order.
///
/// Built once per fetch and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Event<M> {
    venue: Venue,
    title: Option<String>,
    markets: Vec<M>,
}

impl<M> Event<M> {
    pub fn new(venue: Venue, title: Option<String>, markets: Vec<M>) -> Self {
        Self {
            venue,
            title,
            markets,
        }
    }

    #[must_use]
    pub const fn venue(&self) -> Venue {
        self.venue
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn markets(&self) -> &[M] {
        &self.markets
    }
}

/// A single outcome within a market.
///
/// The name is the team label as Polymarket spells it; the token is what gets
/// quoted and traded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    name: String,
    token_id: TokenId,
}

impl Outcome {
    /// Create a new outcome.
    pub fn new(name: impl Into<String>, token_id: TokenId) -> Self {
        Self {
            name: name.into(),
            token_id,
        }
    }

    /// Get the name of this outcome.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the token ID for this outcome.
    #[must_use]
    pub const fn token_id(&self) -> &TokenId {
        &self.token_id
    }
}

/// A Polymarket market as listed on an event.
///
/// Outcome labels and token ids are kept as parsed; pairing them up and
/// checking their count happens when a moneyline is picked.
#[derive(Debug, Clone, Default)]
pub struct OutcomeMarket {
    pub id: String,
    /// Sports market type tag, e.g. `moneyline`, `spreads`, `totals`.
    pub market_type: Option<String>,
    pub question: Option<String>,
    pub outcomes: Vec<String>,
    pub token_ids: Vec<String>,
}

impl OutcomeMarket {
    #[must_use]
    pub fn is_moneyline(&self) -> bool {
        self.market_type.as_deref() == Some("moneyline")
    }
}

/// A Kalshi market: a binary contract on one team, labelled by its yes side.
///
/// Prices are dollar amounts in `[0, 1]`; a missing or unparseable quote is
/// `None`.
#[derive(Debug, Clone, Default)]
pub struct LabeledMarket {
    pub ticker: String,
    pub title: Option<String>,
    /// Human-readable yes-side label, usually the team or city name.
    pub yes_label: Option<String>,
    pub yes_ask: Option<Decimal>,
    pub yes_bid: Option<Decimal>,
    pub no_ask: Option<Decimal>,
    pub no_bid: Option<Decimal>,
}

impl LabeledMarket {
    /// The trimmed yes-side label, if present and non-empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.yes_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }

    /// Whether either side carries an ask price.
    #[must_use]
    pub const fn has_ask(&self) -> bool {
        self.yes_ask.is_some() || self.no_ask.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn label_is_trimmed_and_empty_is_none() {
        let mut market = LabeledMarket {
            yes_label: Some("  Green Bay ".into()),
            ..Default::default()
        };
        assert_eq!(market.label(), Some("Green Bay"));

        market.yes_label = Some("   ".into());
        assert_eq!(market.label(), None);
    }

    #[test]
    fn has_ask_needs_one_side() {
        let mut market = LabeledMarket::default();
        assert!(!market.has_ask());

        market.no_ask = Some(dec!(0.48));
        assert!(market.has_ask());
    }

    #[test]
    fn moneyline_tag_is_exact() {
        let market = OutcomeMarket {
            market_type: Some("moneyline".into()),
            ..Default::default()
        };
        assert!(market.is_moneyline());

        let spread = OutcomeMarket {
            market_type: Some("spreads".into()),
            ..Default::default()
        };
        assert!(!spread.is_moneyline());
    }
}
