//! Cross-venue team matching.
//!
//! Assigns each Kalshi market to one of the Polymarket team labels by
//! comparing canonical forms of the market's yes-side label against the
//! team's aliases, with a shared-word fallback.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::alias::{build_aliases, AliasTable};
use super::market::LabeledMarket;
use super::normalize::canonicalize;

/// Words this short are ignored by the word-overlap fallback.
const MIN_WORD_LEN: usize = 3;

/// How a market was tied to a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Label equals, contains, or is contained in a canonical alias.
    Alias,
    /// Label shares a word with the team's canonical label.
    WordOverlap,
}

/// One Kalshi market as shown in unmatched-team diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketListing {
    pub ticker: String,
    pub label: Option<String>,
    pub yes_ask: Option<Decimal>,
    pub no_ask: Option<Decimal>,
}

/// Kalshi asks keyed by Polymarket team label.
///
/// Teams without a matching market have no entry. When several markets match
/// the same team the cheapest ask per side is kept.
#[derive(Debug, Clone, Default)]
pub struct MatchOutcome {
    yes: HashMap<String, Decimal>,
    no: HashMap<String, Decimal>,
    unmatched: Vec<String>,
    listing: Vec<MarketListing>,
}

impl MatchOutcome {
    #[must_use]
    pub fn yes_ask(&self, team: &str) -> Option<Decimal> {
        self.yes.get(team).copied()
    }

    #[must_use]
    pub fn no_ask(&self, team: &str) -> Option<Decimal> {
        self.no.get(team).copied()
    }

    /// Teams that matched no market, in input order.
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// Every scanned market; populated only when some team went unmatched.
    #[must_use]
    pub fn listing(&self) -> &[MarketListing] {
        &self.listing
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    fn record(&mut self, team: &str, market: &LabeledMarket) {
        if let Some(ask) = market.yes_ask {
            keep_min(&mut self.yes, team, ask);
        }
        if let Some(ask) = market.no_ask {
            keep_min(&mut self.no, team, ask);
        }
    }
}

fn keep_min(prices: &mut HashMap<String, Decimal>, team: &str, ask: Decimal) {
    prices
        .entry(team.to_string())
        .and_modify(|current| *current = (*current).min(ask))
        .or_insert(ask);
}

/// Precomputed canonical forms for one team.
struct TeamKeys<'a> {
    team: &'a str,
    aliases: Vec<String>,
    words: Vec<String>,
}

impl<'a> TeamKeys<'a> {
    fn new(table: &AliasTable, team: &'a str) -> Self {
        let mut aliases: Vec<String> = build_aliases(table, team)
            .iter()
            .map(|alias| canonicalize(alias))
            .filter(|alias| !alias.is_empty())
            .collect();
        aliases.dedup();

        Self {
            team,
            aliases,
            words: significant_words(&canonicalize(team)),
        }
    }

    fn matches(&self, market_label: &str, market_words: &[String]) -> Option<MatchKind> {
        let by_alias = self.aliases.iter().any(|alias| {
            market_label == alias.as_str()
                || market_label.contains(alias.as_str())
                || alias.contains(market_label)
        });
        if by_alias {
            return Some(MatchKind::Alias);
        }

        self.words
            .iter()
            .any(|word| market_words.contains(word))
            .then_some(MatchKind::WordOverlap)
    }
}

fn significant_words(canonical: &str) -> Vec<String> {
    canonical
        .split_whitespace()
        .filter(|word| word.len() >= MIN_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Match Kalshi markets to Polymarket teams and collect their asks.
///
/// Markets without a yes-side label or without any ask are skipped. Each
/// market goes to the first team it matches; later teams are not tried.
#[must_use]
pub fn match_teams(markets: &[LabeledMarket], teams: &[&str], table: &AliasTable) -> MatchOutcome {
    let keys: Vec<TeamKeys<'_>> = teams.iter().map(|team| TeamKeys::new(table, team)).collect();
    let mut outcome = MatchOutcome::default();

    for market in markets {
        let Some(label) = market.label() else {
            continue;
        };
        if !market.has_ask() {
            continue;
        }

        let canonical = canonicalize(label);
        if canonical.is_empty() {
            continue;
        }
        let words = significant_words(&canonical);

        for team in &keys {
            if let Some(kind) = team.matches(&canonical, &words) {
                debug!(
                    ticker = %market.ticker,
                    label = %label,
                    team = %team.team,
                    kind = ?kind,
                    "Matched Kalshi market"
                );
                outcome.record(team.team, market);
                break;
            }
        }
    }

    outcome.unmatched = teams
        .iter()
        .filter(|team| outcome.yes_ask(team).is_none() && outcome.no_ask(team).is_none())
        .map(|team| (*team).to_string())
        .collect();

    if !outcome.unmatched.is_empty() {
        outcome.listing = markets
            .iter()
            .map(|m| MarketListing {
                ticker: m.ticker.clone(),
                label: m.yes_label.clone(),
                yes_ask: m.yes_ask,
                no_ask: m.no_ask,
            })
            .collect();
    }

    outcome
}
