//! Venue adapters: HTTP clients implementing the exchange traits.

pub mod http;
pub mod kalshi;
pub mod polymarket;
