//! Moneyline market selection on a Polymarket event.

use serde::Serialize;

use super::error::DomainError;
use super::ids::TokenId;
use super::market::{Event, Outcome, OutcomeMarket};

/// The two-team winner market a scan is built on.
#[derive(Debug, Clone, Serialize)]
pub struct Moneyline {
    market_id: String,
    question: Option<String>,
    team_a: Outcome,
    team_b: Outcome,
}

impl Moneyline {
    /// Pair up a market's outcomes with its tokens.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::OutcomeCount`] unless the market has exactly two
    /// outcomes and two token ids.
    pub fn try_from_market(market: &OutcomeMarket) -> Result<Self, DomainError> {
        match (market.outcomes.as_slice(), market.token_ids.as_slice()) {
            ([a, b], [token_a, token_b]) => Ok(Self {
                market_id: market.id.clone(),
                question: market.question.clone(),
                team_a: Outcome::new(a.as_str(), TokenId::new(token_a.as_str())),
                team_b: Outcome::new(b.as_str(), TokenId::new(token_b.as_str())),
            }),
            (outcomes, token_ids) => Err(DomainError::OutcomeCount {
                market_id: market.id.clone(),
                outcomes: outcomes.len(),
                token_ids: token_ids.len(),
            }),
        }
    }

    #[must_use]
    pub fn market_id(&self) -> &str {
        &self.market_id
    }

    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    #[must_use]
    pub const fn team_a(&self) -> &Outcome {
        &self.team_a
    }

    #[must_use]
    pub const fn team_b(&self) -> &Outcome {
        &self.team_b
    }

    /// Team labels in outcome order.
    #[must_use]
    pub fn team_names(&self) -> [&str; 2] {
        [self.team_a.name(), self.team_b.name()]
    }
}

/// Pick the moneyline market of an event.
///
/// When several markets are tagged `moneyline`, the first whose question reads
/// like a matchup ("Packers vs. Bears") wins; otherwise the first tagged one.
///
/// # Errors
///
/// Returns [`DomainError::NoMoneylineMarket`] when nothing is tagged, and
/// [`DomainError::OutcomeCount`] when the chosen market is not two-sided.
pub fn pick_moneyline(event: &Event<OutcomeMarket>, slug: &str) -> Result<Moneyline, DomainError> {
    let mut candidates = event.markets().iter().filter(|m| m.is_moneyline()).peekable();
    let first = candidates
        .peek()
        .copied()
        .ok_or_else(|| DomainError::NoMoneylineMarket {
            slug: slug.to_string(),
        })?;

    let chosen = candidates
        .find(|m| looks_like_matchup(m.question.as_deref()))
        .unwrap_or(first);

    Moneyline::try_from_market(chosen)
}

fn looks_like_matchup(question: Option<&str>) -> bool {
    let question = question.unwrap_or_default().to_lowercase();
    question.contains(" vs") || question.contains("vs.")
}
