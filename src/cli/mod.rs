//! Command-line interface definitions.

pub mod report;
pub mod run;

use clap::Parser;
use std::path::PathBuf;

/// Gamescan - cross-venue arbitrage check for one game on Polymarket and Kalshi.
#[derive(Parser, Debug)]
#[command(name = "gamescan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Polymarket event slug (e.g. nfl-gb-chi-2025-12-07)
    pub poly_slug: String,

    /// Kalshi event ticker (e.g. KXNFLGAME-25DEC07GBCHI); case-insensitive
    pub kalshi_ticker: String,

    /// Path to configuration file [default: gamescan.toml if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Contracts per leg used for the Kalshi fee
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub contracts: u32,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}
