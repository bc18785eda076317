//! Single-event scan across both venues.

use tracing::{info, warn};

use super::cache::QuoteCache;
use super::report::ScanReport;
use crate::domain::{
    evaluate, match_teams, pick_moneyline, select_best, AliasTable, EventTicker, FeeSchedule,
    MatchOutcome, Outcome, PriceQuote, Side, TeamBook, Venue,
};
use crate::error::Result;
use crate::exchange::{LabeledExchange, OutcomeExchange};

/// Fetches one event from each venue and prices every hedge between them.
pub struct Scanner<P, K> {
    polymarket: P,
    kalshi: K,
    aliases: AliasTable,
    fees: FeeSchedule,
    contracts: u32,
}

impl<P, K> Scanner<P, K>
where
    P: OutcomeExchange,
    K: LabeledExchange,
{
    pub fn new(polymarket: P, kalshi: K, aliases: AliasTable) -> Self {
        Self {
            polymarket,
            kalshi,
            aliases,
            fees: FeeSchedule::default(),
            contracts: 1,
        }
    }

    #[must_use]
    pub fn with_fees(mut self, fees: FeeSchedule) -> Self {
        self.fees = fees;
        self
    }

    /// Order size the fees are computed for; zero is treated as one.
    #[must_use]
    pub fn with_contracts(mut self, contracts: u32) -> Self {
        self.contracts = contracts.max(1);
        self
    }

    /// Run the scan.
    ///
    /// Unmatched Kalshi teams are logged and reported, not treated as
    /// errors; they only reduce the set of combinations.
    ///
    /// # Errors
    ///
    /// Any request failure, non-success status or malformed venue payload
    /// ends the scan.
    pub async fn scan(&self, slug: &str, ticker: &EventTicker) -> Result<ScanReport> {
        let poly_event = self.polymarket.event_by_slug(slug).await?;
        let moneyline = pick_moneyline(&poly_event, slug)?;
        let [team_a, team_b] = moneyline.team_names();
        info!(
            market_id = moneyline.market_id(),
            team_a,
            team_b,
            "Selected moneyline market"
        );

        let mut cache = QuoteCache::new();
        cache
            .fill(
                &self.polymarket,
                &[moneyline.team_a().token_id(), moneyline.team_b().token_id()],
            )
            .await?;

        let kalshi_event = self.kalshi.event_markets(ticker).await?;
        let matched = match_teams(kalshi_event.markets(), &[team_a, team_b], &self.aliases);
        for team in matched.unmatched() {
            warn!(
                team = %team,
                venue = self.kalshi.exchange_name(),
                markets = kalshi_event.markets().len(),
                "No Kalshi market matched team"
            );
        }

        let books = [
            team_book(moneyline.team_a(), moneyline.team_b(), &cache, &matched),
            team_book(moneyline.team_b(), moneyline.team_a(), &cache, &matched),
        ];

        let combinations = evaluate(&books[0], &books[1], &self.fees, self.contracts);
        let best = select_best(&combinations).cloned();
        if let Some(best) = &best {
            info!(
                strategy = %best.name(),
                cost_with_fees = %best.total_cost_with_fees,
                "Best cross-venue combination"
            );
        }

        Ok(ScanReport {
            captured_at: chrono::Utc::now(),
            poly_slug: slug.to_string(),
            kalshi_ticker: ticker.to_string(),
            poly_title: poly_event.title().map(str::to_string),
            kalshi_title: kalshi_event.title().map(str::to_string),
            teams: books,
            contracts: self.contracts,
            best,
            combinations,
            unmatched: matched.unmatched().to_vec(),
            kalshi_markets: matched.listing().to_vec(),
            moneyline,
        })
    }
}

/// Quotes for `team`: Polymarket YES is its own token, Polymarket NO is the
/// opponent's token (one of the two always wins).
fn team_book(
    team: &Outcome,
    opponent: &Outcome,
    cache: &QuoteCache,
    matched: &MatchOutcome,
) -> TeamBook {
    let mut book = TeamBook::new(team.name());

    let polymarket = [(Side::Yes, team.token_id()), (Side::No, opponent.token_id())];
    for (side, token) in polymarket {
        if let Some(ask) = cache.ask(token) {
            book.insert(PriceQuote::new(Venue::Polymarket, side, ask).with_token(token.clone()));
        }
    }

    book.insert_ask(Venue::Kalshi, Side::Yes, matched.yes_ask(team.name()));
    book.insert_ask(Venue::Kalshi, Side::No, matched.no_ask(team.name()));
    book
}
