//! The result of one scan.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{cross_venue, Combination, MarketListing, Moneyline, TeamBook};

/// Everything a scan found, ready to render as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub captured_at: DateTime<Utc>,
    pub poly_slug: String,
    pub kalshi_ticker: String,
    pub poly_title: Option<String>,
    pub kalshi_title: Option<String>,
    pub moneyline: Moneyline,
    /// Team A then team B, in Polymarket outcome order.
    pub teams: [TeamBook; 2],
    /// Contracts the fees were computed for.
    pub contracts: u32,
    /// Every priced combination in evaluation order.
    pub combinations: Vec<Combination>,
    /// Cheapest cross-venue combination by cost with fees.
    pub best: Option<Combination>,
    /// Teams no Kalshi market was matched to.
    pub unmatched: Vec<String>,
    /// Kalshi markets as listed, kept only when a team went unmatched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub kalshi_markets: Vec<MarketListing>,
}

impl ScanReport {
    /// Cross-venue combinations, cheapest first.
    #[must_use]
    pub fn cross_venue(&self) -> Vec<&Combination> {
        cross_venue(&self.combinations)
    }

    /// Whether `combo` is the selected best combination.
    #[must_use]
    pub fn is_best(&self, combo: &Combination) -> bool {
        self.best.as_ref() == Some(combo)
    }

    /// Display title of the Polymarket event, falling back to its slug.
    #[must_use]
    pub fn poly_event(&self) -> &str {
        self.poly_title.as_deref().unwrap_or(&self.poly_slug)
    }

    /// Display title of the Kalshi event, falling back to its ticker.
    #[must_use]
    pub fn kalshi_event(&self) -> &str {
        self.kalshi_title.as_deref().unwrap_or(&self.kalshi_ticker)
    }
}
