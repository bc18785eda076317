//! Handler for a scan invocation.

use tracing::info;

use crate::adapter::kalshi::KalshiClient;
use crate::adapter::polymarket::PolymarketClient;
use crate::app::Scanner;
use crate::cli::{report, Cli};
use crate::config::Config;
use crate::domain::EventTicker;
use crate::error::Result;

/// Execute the scan described by `cli` and print the report.
pub async fn execute(cli: &Cli) -> Result<()> {
    let mut config = Config::discover(cli.config.as_deref())?;

    // Apply CLI overrides
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if cli.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    let ticker = EventTicker::new(&cli.kalshi_ticker);
    info!(
        slug = %cli.poly_slug,
        ticker = %ticker,
        contracts = cli.contracts,
        "gamescan starting"
    );

    let polymarket = PolymarketClient::new(config.network.gamma()?, config.network.clob()?);
    let kalshi = KalshiClient::new(config.network.kalshi()?);
    let aliases = config.aliases.load_table()?;

    let scanner = Scanner::new(polymarket, kalshi, aliases)
        .with_fees(config.fees)
        .with_contracts(cli.contracts);
    let report = scanner.scan(&cli.poly_slug, &ticker).await?;

    if let Some(diagnostics) = report::render_unmatched(&report) {
        eprint!("{diagnostics}");
    }

    if cli.json {
        println!("{}", report::render_json(&report)?);
        return Ok(());
    }

    print!("{}", report::render_text(&report));

    Ok(())
}
