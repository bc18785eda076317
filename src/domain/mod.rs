//! Venue-agnostic scanning logic: name matching and hedge pricing.

pub mod alias;
pub mod combination;
pub mod error;
pub mod fee;
pub mod matcher;
pub mod normalize;

mod ids;
mod market;
mod money;
mod moneyline;
mod quote;
mod venue;

// Core domain types
pub use ids::{EventTicker, TokenId};
pub use market::{Event, LabeledMarket, Outcome, OutcomeMarket};
pub use money::{is_probability, parse_price, Price};
pub use moneyline::{pick_moneyline, Moneyline};
pub use quote::{PriceQuote, TeamBook};
pub use venue::{Side, Venue};

// Matching and pricing
pub use alias::{build_aliases, AliasTable};
pub use combination::{cross_venue, evaluate, select_best, Combination, Leg};
pub use error::DomainError;
pub use fee::{kalshi_fee, FeeSchedule, KALSHI_TAKER_RATE};
pub use matcher::{match_teams, MarketListing, MatchOutcome};
pub use normalize::canonicalize;
