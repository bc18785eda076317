//! Polymarket exchange integration.

mod client;
mod response;

pub use client::PolymarketClient;
pub use response::{GammaEvent, GammaMarket, PriceResponse};
