//! End-to-end scans against mocked venue APIs.

mod support;

use rust_decimal_macros::dec;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gamescan::adapter::kalshi::KalshiClient;
use gamescan::adapter::polymarket::PolymarketClient;
use gamescan::app::Scanner;
use gamescan::domain::{AliasTable, DomainError, EventTicker, Side, Venue};
use gamescan::error::Error;

use support::*;

fn scanner(server: &MockServer) -> Scanner<PolymarketClient, KalshiClient> {
    let base = Url::parse(&server.uri()).unwrap();
    Scanner::new(
        PolymarketClient::new(base.clone(), base),
        KalshiClient::new(Url::parse(&kalshi_url(server)).unwrap()),
        AliasTable::builtin().unwrap(),
    )
}

#[tokio::test]
async fn test_scan_selects_best_cross_venue_combination() {
    let server = MockServer::start().await;
    mount_game(&server).await;

    let report = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER.to_lowercase()))
        .await
        .expect("scan should succeed");

    assert_eq!(report.poly_title.as_deref(), Some("Packers vs. Bears"));
    assert_eq!(report.kalshi_title.as_deref(), Some("Green Bay at Chicago"));
    assert_eq!(report.moneyline.market_id(), "555");
    assert!(report.unmatched.is_empty());

    let packers = &report.teams[0];
    assert_eq!(packers.team(), "Packers");
    assert_eq!(packers.quote(Venue::Polymarket, Side::Yes).unwrap().ask, dec!(0.55));
    assert_eq!(packers.quote(Venue::Polymarket, Side::No).unwrap().ask, dec!(0.42));
    assert_eq!(packers.quote(Venue::Kalshi, Side::Yes).unwrap().ask, dec!(0.52));
    assert_eq!(packers.quote(Venue::Kalshi, Side::No).unwrap().ask, dec!(0.49));

    assert_eq!(report.combinations.len(), 8);
    let best = report.best.as_ref().expect("a cross-venue combination");
    assert_eq!(best.name(), "Kalshi YES + Polymarket YES");
    assert_eq!(best.total_cost, dec!(0.94));
    assert_eq!(best.total_cost_with_fees, dec!(0.96));
    assert_eq!(best.edge_after_fees(), dec!(0.04));

    let costs: Vec<_> = report
        .cross_venue()
        .iter()
        .map(|c| c.total_cost_with_fees)
        .collect();
    assert_eq!(costs, [dec!(0.96), dec!(0.97), dec!(1.05), dec!(1.06)]);
}

#[tokio::test]
async fn test_scan_reports_unmatched_team_and_keeps_going() {
    let server = MockServer::start().await;
    mount_gamma(&server, gamma_event()).await;
    mount_price(&server, TOKEN_GB, "0.55").await;
    mount_price(&server, TOKEN_CHI, "0.42").await;
    mount_kalshi(
        &server,
        kalshi_event(vec![
            kalshi_market("GREEN BAY", "0.52", "0.49"),
            kalshi_market("Detroit", "0.30", "0.71"),
        ]),
    )
    .await;

    let report = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .expect("unmatched teams are not fatal");

    assert_eq!(report.unmatched, ["Bears"]);
    assert_eq!(report.kalshi_markets.len(), 2);
    assert_eq!(report.kalshi_markets[1].label.as_deref(), Some("Detroit"));
    assert!(report.teams[1].quote(Venue::Kalshi, Side::Yes).is_none());

    // Polymarket pair on each side plus the two Packers-on-Kalshi hedges.
    assert_eq!(report.combinations.len(), 4);
    assert_eq!(report.cross_venue().len(), 2);
}

#[tokio::test]
async fn test_scan_falls_back_to_top_level_kalshi_markets() {
    let server = MockServer::start().await;
    mount_gamma(&server, gamma_event()).await;
    mount_price(&server, TOKEN_GB, "0.55").await;
    mount_price(&server, TOKEN_CHI, "0.42").await;
    mount_kalshi(
        &server,
        json!({
            "event": { "event_ticker": TICKER, "title": "Green Bay at Chicago" },
            "markets": [
                kalshi_market("Green Bay Packers", "0.52", "0.49"),
                kalshi_market("Chicago Bears", "0.40", "0.61")
            ]
        }),
    )
    .await;

    let report = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap();

    assert!(report.unmatched.is_empty());
    assert_eq!(
        report.best.as_ref().map(|c| c.name()).as_deref(),
        Some("Kalshi YES + Polymarket YES")
    );
}

#[tokio::test]
async fn test_scan_accepts_kalshi_response_without_event() {
    let server = MockServer::start().await;
    mount_gamma(&server, gamma_event()).await;
    mount_price(&server, TOKEN_GB, "0.55").await;
    mount_price(&server, TOKEN_CHI, "0.42").await;
    mount_kalshi(
        &server,
        json!({
            "markets": [
                kalshi_market("Green Bay", "0.52", "0.49"),
                kalshi_market("Chicago", "0.40", "0.61")
            ]
        }),
    )
    .await;

    let report = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap();

    assert_eq!(report.kalshi_title, None);
    assert!(report.unmatched.is_empty());
    assert_eq!(report.cross_venue().len(), 4);
}

#[tokio::test]
async fn test_scan_fails_on_missing_polymarket_event() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/events/slug/{SLUG}")))
        .respond_with(ResponseTemplate::new(404).set_body_string("{\"error\":\"not found\"}"))
        .expect(1)
        .mount(&server)
        .await;

    let err = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap_err();

    match err {
        Error::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_scan_fails_on_invalid_price() {
    let server = MockServer::start().await;
    mount_gamma(&server, gamma_event()).await;
    mount_price(&server, TOKEN_GB, "1.7").await;
    // The sibling request may be cancelled once the first one fails.
    Mock::given(method("GET"))
        .and(path("/price"))
        .and(query_param("token_id", TOKEN_CHI))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "price": "0.42" })))
        .mount(&server)
        .await;

    let err = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Domain(DomainError::InvalidPrice { ref token_id, .. }) if token_id == TOKEN_GB
    ));
}

#[tokio::test]
async fn test_scan_fails_without_moneyline_market() {
    let server = MockServer::start().await;
    mount_gamma(
        &server,
        json!({
            "title": "Packers vs. Bears",
            "markets": [{ "id": "554", "sportsMarketType": "spreads" }]
        }),
    )
    .await;

    let err = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Domain(DomainError::NoMoneylineMarket { .. })
    ));
}

#[tokio::test]
async fn test_scan_fails_when_kalshi_event_has_no_markets() {
    let server = MockServer::start().await;
    mount_gamma(&server, gamma_event()).await;
    mount_price(&server, TOKEN_GB, "0.55").await;
    mount_price(&server, TOKEN_CHI, "0.42").await;
    mount_kalshi(&server, kalshi_event(vec![])).await;

    let err = scanner(&server)
        .scan(SLUG, &EventTicker::new(TICKER))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Domain(DomainError::NoVenueMarkets { .. })
    ));
}
