//! Data-shape errors raised while turning venue responses into domain types.
//!
//! Every variant is fatal to a scan: the run stops and the error is reported
//! by the entry point.

use thiserror::Error;

/// Errors that occur when venue data violates the shape a scan depends on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The Polymarket event carries no market tagged `moneyline`.
    #[error("Polymarket: no sportsMarketType=moneyline market in event '{slug}'")]
    NoMoneylineMarket {
        /// Event slug that was scanned.
        slug: String,
    },

    /// The chosen moneyline market is not a two-team market.
    #[error(
        "Polymarket: moneyline market does not have 2 outcomes/tokenIds \
         (marketId={market_id}, outcomes={outcomes}, tokenIds={token_ids})"
    )]
    OutcomeCount {
        /// Id of the offending market.
        market_id: String,
        /// Number of outcome labels found.
        outcomes: usize,
        /// Number of token ids found.
        token_ids: usize,
    },

    /// A quoted price is missing, not a number, or outside `[0, 1]`.
    #[error("Polymarket: invalid price for token_id={token_id}: {raw}")]
    InvalidPrice {
        /// Token the quote was requested for.
        token_id: String,
        /// Raw value returned by the venue.
        raw: String,
    },

    /// The Kalshi event response contains no markets at all.
    #[error("Kalshi: no markets found in event '{ticker}'")]
    NoVenueMarkets {
        /// Event ticker that was scanned.
        ticker: String,
    },
}
