//! Gamescan - one-shot cross-venue arbitrage check for a single game.
//!
//! Fetches a game's moneyline market on Polymarket and the matching event on
//! Kalshi, lines up the two teams across venues by name, and prices every
//! same-side hedge (YES on both teams or NO on both) including Kalshi fees.
//!
//! # Modules
//!
//! - [`domain`] - Venue-agnostic types: name normalization, aliases,
//!   matching, fees and combinations
//! - [`exchange`] - Read-only traits each venue client implements
//! - [`adapter`] - HTTP clients for the Polymarket and Kalshi APIs
//! - [`app`] - The scan itself and its report
//! - [`cli`] - Argument parsing and report rendering
//! - [`config`] - Configuration loading from TOML files and the environment
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use gamescan::adapter::kalshi::KalshiClient;
//! use gamescan::adapter::polymarket::PolymarketClient;
//! use gamescan::app::Scanner;
//! use gamescan::config::Config;
//! use gamescan::domain::EventTicker;
//!
//! # async fn run() -> gamescan::error::Result<()> {
//! let config = Config::default();
//! let scanner = Scanner::new(
//!     PolymarketClient::new(config.network.gamma()?, config.network.clob()?),
//!     KalshiClient::new(config.network.kalshi()?),
//!     config.aliases.load_table()?,
//! );
//!
//! let report = scanner
//!     .scan("nfl-gb-chi-2025-12-07", &EventTicker::new("KXNFLGAME-25DEC07GBCHI"))
//!     .await?;
//! if let Some(best) = &report.best {
//!     println!("{}: {}", best.name(), best.edge_after_fees());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
