//! Shared fixtures: a mock server standing in for the Gamma, CLOB and Kalshi
//! APIs, loaded with a Packers at Bears game.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SLUG: &str = "nfl-gb-chi-2025-12-07";
pub const TICKER: &str = "KXNFLGAME-25DEC07GBCHI";
pub const TOKEN_GB: &str = "7132";
pub const TOKEN_CHI: &str = "8844";
pub const KALSHI_PREFIX: &str = "/trade-api/v2";

pub fn gamma_event() -> Value {
    json!({
        "id": "9001",
        "slug": SLUG,
        "title": "Packers vs. Bears",
        "markets": [
            {
                "id": "554",
                "sportsMarketType": "spreads",
                "question": "Spread: Packers (-3.5)",
                "outcomes": "[\"Packers\", \"Bears\"]",
                "clobTokenIds": "[\"1\", \"2\"]"
            },
            {
                "id": "555",
                "sportsMarketType": "moneyline",
                "question": "Packers vs. Bears",
                "outcomes": "[\"Packers\", \"Bears\"]",
                "clobTokenIds": format!("[\"{TOKEN_GB}\", \"{TOKEN_CHI}\"]")
            }
        ]
    })
}

pub fn kalshi_market(label: &str, yes_ask: &str, no_ask: &str) -> Value {
    json!({
        "ticker": format!("{TICKER}-{}", label.to_uppercase().replace(' ', "")),
        "title": format!("{label} to win?"),
        "yes_sub_title": label,
        "yes_ask_dollars": yes_ask,
        "no_ask_dollars": no_ask
    })
}

pub fn kalshi_event(markets: Vec<Value>) -> Value {
    json!({
        "event": {
            "event_ticker": TICKER,
            "title": "Green Bay at Chicago",
            "markets": markets
        }
    })
}

pub async fn mount_gamma(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/events/slug/{SLUG}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Each token must be priced exactly once per scan.
pub async fn mount_price(server: &MockServer, token: &str, price: &str) {
    Mock::given(method("GET"))
        .and(path("/price"))
        .and(query_param("token_id", token))
        .and(query_param("side", "SELL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "price": price })))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_kalshi(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("{KALSHI_PREFIX}/events/{TICKER}")))
        .and(query_param("with_nested_markets", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

/// A full game where buying Kalshi YES on the Packers and Polymarket YES on
/// the Bears costs 0.96 after fees.
pub async fn mount_game(server: &MockServer) {
    mount_gamma(server, gamma_event()).await;
    mount_price(server, TOKEN_GB, "0.55").await;
    mount_price(server, TOKEN_CHI, "0.42").await;
    mount_kalshi(
        server,
        kalshi_event(vec![
            kalshi_market("Green Bay", "0.52", "0.49"),
            kalshi_market("Chicago", "0.40", "0.61"),
        ]),
    )
    .await;
}

pub fn kalshi_url(server: &MockServer) -> String {
    format!("{}{KALSHI_PREFIX}", server.uri())
}
