//! Polymarket API response types.
//!
//! Two API surfaces:
//! - **Gamma API** (`gamma-api.polymarket.com`): events and their markets,
//!   with outcome labels and CLOB token ids as JSON-encoded strings.
//! - **CLOB API** (`clob.polymarket.com`): live prices per token.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{parse_price, Event, OutcomeMarket, Price, Venue};

/// Event returned by `GET /events/slug/{slug}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaEvent {
    pub title: Option<String>,
    pub markets: Option<Vec<GammaMarket>>,
}

impl GammaEvent {
    /// Convert into the domain event, keeping market order.
    #[must_use]
    pub fn into_event(self) -> Event<OutcomeMarket> {
        let markets = self
            .markets
            .unwrap_or_default()
            .into_iter()
            .map(GammaMarket::into_market)
            .collect();
        Event::new(Venue::Polymarket, self.title, markets)
    }
}

/// Market data nested in a Gamma event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    /// Numeric or string id depending on the endpoint.
    #[serde(default)]
    pub id: Value,
    /// Sports market type, e.g. `moneyline`.
    pub sports_market_type: Option<String>,
    pub question: Option<String>,
    /// JSON-encoded outcome names (e.g., `["Packers", "Bears"]`).
    pub outcomes: Option<String>,
    /// JSON-encoded CLOB token IDs, paired with `outcomes` by position.
    pub clob_token_ids: Option<String>,
}

impl GammaMarket {
    #[must_use]
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Parse the JSON-encoded outcome names.
    #[must_use]
    pub fn outcome_names(&self) -> Vec<String> {
        self.decode_list(self.outcomes.as_deref(), "outcomes")
    }

    /// Parse the JSON-encoded CLOB token IDs.
    #[must_use]
    pub fn token_ids(&self) -> Vec<String> {
        self.decode_list(self.clob_token_ids.as_deref(), "clobTokenIds")
    }

    fn decode_list(&self, raw: Option<&str>, field: &'static str) -> Vec<String> {
        raw.and_then(|s| {
            serde_json::from_str::<Vec<Value>>(s)
                .map_err(|e| {
                    debug!(
                        error = %e,
                        raw = %s,
                        market_id = %self.id_string(),
                        field,
                        "Failed to parse JSON-encoded list"
                    );
                })
                .ok()
        })
        .map(|values| values.into_iter().map(value_to_string).collect())
        .unwrap_or_default()
    }

    fn into_market(self) -> OutcomeMarket {
        OutcomeMarket {
            id: self.id_string(),
            outcomes: self.outcome_names(),
            token_ids: self.token_ids(),
            market_type: self.sports_market_type,
            question: self.question,
        }
    }
}

fn value_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Response of `GET /price?token_id=…&side=…`.
#[derive(Debug, Deserialize)]
pub struct PriceResponse {
    /// Quoted as a string (`"0.55"`) but tolerated as a number.
    #[serde(default)]
    pub price: Value,
}

impl PriceResponse {
    /// The price, if it is a number in `[0, 1]`.
    #[must_use]
    pub fn price(&self) -> Option<Price> {
        match &self.price {
            Value::String(s) => parse_price(s),
            Value::Number(n) => parse_price(&n.to_string()),
            _ => None,
        }
    }
}
