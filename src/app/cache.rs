//! Per-run Polymarket price cache.
//!
//! A two-outcome market has two tokens, and the NO side of one team is the
//! YES token of the other, so four logical quotes cost two requests.

use std::collections::HashMap;

use futures_util::future::try_join_all;
use tracing::debug;

use crate::domain::{Price, TokenId};
use crate::error::Result;
use crate::exchange::OutcomeExchange;

/// Best asks keyed by token, filled once per scan.
#[derive(Debug, Clone, Default)]
pub struct QuoteCache {
    asks: HashMap<TokenId, Price>,
}

impl QuoteCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every token not yet cached, concurrently.
    ///
    /// Duplicates in `tokens` are requested once. The first failed request
    /// fails the whole fill and nothing is cached.
    ///
    /// # Errors
    ///
    /// Propagates the exchange error of the first failed request.
    pub async fn fill<E>(&mut self, exchange: &E, tokens: &[&TokenId]) -> Result<()>
    where
        E: OutcomeExchange + ?Sized,
    {
        let mut pending: Vec<&TokenId> = Vec::with_capacity(tokens.len());
        for &token in tokens {
            if !self.asks.contains_key(token) && !pending.contains(&token) {
                pending.push(token);
            }
        }

        debug!(
            exchange = exchange.exchange_name(),
            requests = pending.len(),
            "Fetching best asks"
        );

        let asks = try_join_all(pending.iter().map(|&token| async move {
            let ask = exchange.best_ask(token).await?;
            Ok::<_, crate::error::Error>((token.clone(), ask))
        }))
        .await?;

        self.asks.extend(asks);
        Ok(())
    }

    #[must_use]
    pub fn ask(&self, token: &TokenId) -> Option<Price> {
        self.asks.get(token).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.asks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.asks.is_empty()
    }
}
