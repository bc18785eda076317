//! Hedge combinations across venues.
//!
//! A hedge buys the same side for both teams: YES on each (one of them wins)
//! or NO on each (one of them loses). Either way exactly one leg pays $1, so a
//! pair costing less than $1 locks in the difference. Mixed sides bet on the
//! same result twice and are never built.

use rust_decimal::Decimal;
use serde::Serialize;

use super::fee::FeeSchedule;
use super::money::Price;
use super::quote::{PriceQuote, TeamBook};
use super::venue::{Side, Venue};

/// Venue pairings in evaluation order: (team A venue, team B venue).
static VENUE_PAIRS: [(Venue, Venue); 4] = [
    (Venue::Polymarket, Venue::Polymarket),
    (Venue::Kalshi, Venue::Kalshi),
    (Venue::Polymarket, Venue::Kalshi),
    (Venue::Kalshi, Venue::Polymarket),
];

static SIDES: [Side; 2] = [Side::Yes, Side::No];

/// One purchased contract of a combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    #[serde(flatten)]
    pub quote: PriceQuote,
    /// Per-contract fee; `None` where the venue's fee is not modelled.
    pub fee: Option<Decimal>,
}

impl Leg {
    #[must_use]
    pub fn venue(&self) -> Venue {
        self.quote.venue
    }

    #[must_use]
    pub fn ask(&self) -> Price {
        self.quote.ask
    }

    #[must_use]
    pub fn cost_with_fee(&self) -> Decimal {
        self.quote.ask + self.fee.unwrap_or(Decimal::ZERO)
    }
}

/// A same-side pairing of one leg per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub side: Side,
    pub team_a: Leg,
    pub team_b: Leg,
    /// `ask_a + ask_b`.
    pub total_cost: Decimal,
    /// `ask_a + fee_a + ask_b + fee_b`.
    pub total_cost_with_fees: Decimal,
}

impl Combination {
    fn new(side: Side, team_a: Leg, team_b: Leg) -> Self {
        Self {
            side,
            total_cost: team_a.ask() + team_b.ask(),
            total_cost_with_fees: team_a.cost_with_fee() + team_b.cost_with_fee(),
            team_a,
            team_b,
        }
    }

    /// Display name, e.g. `Polymarket YES + Kalshi YES`.
    #[must_use]
    pub fn name(&self) -> String {
        format!(
            "{} {} + {} {}",
            self.team_a.venue(),
            self.side,
            self.team_b.venue(),
            self.side
        )
    }

    /// Whether the legs are bought on different venues.
    #[must_use]
    pub fn is_cross_venue(&self) -> bool {
        self.team_a.venue() != self.team_b.venue()
    }

    /// Guaranteed payout minus pre-fee cost.
    #[must_use]
    pub fn edge(&self) -> Decimal {
        Decimal::ONE - self.total_cost
    }

    /// Guaranteed payout minus cost including fees.
    #[must_use]
    pub fn edge_after_fees(&self) -> Decimal {
        Decimal::ONE - self.total_cost_with_fees
    }
}

/// Build every same-side combination for which both legs are priced.
///
/// Order is YES before NO, and within a side Polymarket/Polymarket,
/// Kalshi/Kalshi, Polymarket/Kalshi, Kalshi/Polymarket. Fees are computed for
/// an order of `contracts` and charged per contract.
#[must_use]
pub fn evaluate(
    team_a: &TeamBook,
    team_b: &TeamBook,
    fees: &FeeSchedule,
    contracts: u32,
) -> Vec<Combination> {
    let leg = |quote: &PriceQuote| Leg {
        fee: fees.per_contract_fee(quote.venue, quote.ask, contracts),
        quote: quote.clone(),
    };

    SIDES
        .iter()
        .flat_map(|&side| {
            VENUE_PAIRS.iter().filter_map(move |&(venue_a, venue_b)| {
                let a = team_a.quote(venue_a, side)?;
                let b = team_b.quote(venue_b, side)?;
                Some((side, a, b))
            })
        })
        .map(|(side, a, b)| Combination::new(side, leg(a), leg(b)))
        .collect()
}

/// Cross-venue combinations ordered by cost with fees, cheapest first.
///
/// The sort is stable, so equal costs keep evaluation order.
#[must_use]
pub fn cross_venue(combinations: &[Combination]) -> Vec<&Combination> {
    let mut cross: Vec<&Combination> = combinations
        .iter()
        .filter(|c| c.is_cross_venue())
        .collect();
    cross.sort_by(|a, b| a.total_cost_with_fees.cmp(&b.total_cost_with_fees));
    cross
}

/// The cheapest cross-venue combination by cost with fees.
///
/// Ties go to the combination evaluated first. `None` when no cross-venue
/// combination exists.
#[must_use]
pub fn select_best(combinations: &[Combination]) -> Option<&Combination> {
    combinations
        .iter()
        .filter(|c| c.is_cross_venue())
        .fold(None, |best: Option<&Combination>, current| match best {
            Some(b) if b.total_cost_with_fees <= current.total_cost_with_fees => Some(b),
            _ => Some(current),
        })
}
