//! Kalshi exchange integration.

mod client;
mod response;

pub use client::KalshiClient;
pub use response::{KalshiEvent, KalshiEventResponse, KalshiMarket};
