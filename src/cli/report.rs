//! Report rendering.
//!
//! Text output is built into a `String` so it can be tested; colors are only
//! applied when the target stream supports them, so piped output is plain.

use std::fmt::{Display, Write};

use owo_colors::{OwoColorize, Stream};
use rust_decimal::Decimal;

use crate::app::ScanReport;
use crate::domain::{Combination, Leg, Side, TeamBook, Venue};
use crate::error::Result;

const NO_COMBINATIONS: &str =
    "No valid combinations found. Check if prices are available for both teams.";
const NO_CROSS_VENUE: &str = "No cross-market arbitrage opportunities found.";

/// Render the report as one pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`crate::error::Error::Json`] if serialization fails.
pub fn render_json(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the human-readable report for stdout.
#[must_use]
pub fn render_text(report: &ScanReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

/// Render the unmatched-team diagnostics for stderr, if any team went
/// unmatched.
#[must_use]
pub fn render_unmatched(report: &ScanReport) -> Option<String> {
    if report.unmatched.is_empty() {
        return None;
    }
    let mut out = String::new();
    let _ = write_unmatched(&mut out, report);
    Some(out)
}

fn write_text(out: &mut String, report: &ScanReport) -> std::fmt::Result {
    if report.combinations.is_empty() {
        writeln!(out, "{NO_COMBINATIONS}")?;
        return Ok(());
    }

    let cross = report.cross_venue();
    let Some(best) = report.best.as_ref() else {
        writeln!(out, "{NO_CROSS_VENUE}")?;
        writeln!(out, "All combinations use the same platform for both teams.")?;
        return Ok(());
    };

    heading(out, "Cross-platform arbitrage opportunities")?;
    writeln!(out, "Polymarket event: {}", report.poly_event())?;
    writeln!(out, "Kalshi event:     {}", report.kalshi_event())?;
    writeln!(out)?;

    for (label, book) in ["A", "B"].iter().zip(&report.teams) {
        write_team(out, label, book)?;
        writeln!(out)?;
    }

    heading(out, "Cross-market combinations only")?;
    for (idx, combo) in cross.iter().enumerate() {
        let marker = if report.is_best(combo) { " ⭐ BEST" } else { "" };
        writeln!(out, "{}. {}{}", idx + 1, styled_name(combo), marker)?;
        writeln!(out, "   Team A: {}", leg_summary(&combo.team_a))?;
        writeln!(out, "   Team B: {}", leg_summary(&combo.team_b))?;
        writeln!(
            out,
            "   Total (pre-fee):   {:.4} (Edge: {:.4} {})",
            combo.total_cost,
            combo.edge(),
            mark(combo.edge())
        )?;
        writeln!(
            out,
            "   Total (with fees): {:.4} (Edge: {:.4} {})",
            combo.total_cost_with_fees,
            combo.edge_after_fees(),
            mark(combo.edge_after_fees())
        )?;
        writeln!(out)?;
    }

    heading(out, "Best combination")?;
    writeln!(out, "Strategy: {}", styled_name(best))?;
    write_best_leg(out, "A", &best.team_a, report.contracts)?;
    write_best_leg(out, "B", &best.team_b, report.contracts)?;
    writeln!(out, "Set cost (pre-fee):   {:.4}", best.total_cost)?;
    writeln!(out, "Set cost (with fees): {:.4}", best.total_cost_with_fees)?;
    writeln!(out, "Edge (pre-fee):       {:.4} {}", best.edge(), mark(best.edge()))?;
    let verdict = if best.edge_after_fees() > Decimal::ZERO {
        format!("{} {}", mark(best.edge_after_fees()), positive("(arbitrage opportunity)"))
    } else {
        mark(best.edge_after_fees()).to_string()
    };
    writeln!(out, "Edge (after fees):    {:.4} {}", best.edge_after_fees(), verdict)?;

    writeln!(out)?;
    writeln!(out, "NOTE:")?;
    writeln!(out, "- Polymarket fees are not computed; its legs are shown without a fee.")?;
    writeln!(
        out,
        "- Assumes the contracts on both venues are economically equivalent."
    )?;
    writeln!(
        out,
        "- Sports cancellation/postponement rules can differ across platforms; verify before trading."
    )?;
    writeln!(out, "- NO positions mean betting against that team winning.")?;

    Ok(())
}

fn write_team(out: &mut String, label: &str, book: &TeamBook) -> std::fmt::Result {
    writeln!(
        out,
        "[Team {label}] {}",
        book.team().if_supports_color(Stream::Stdout, |t| t.bold())
    )?;

    let rows = [
        (Venue::Polymarket, Side::Yes, "Polymarket YES:"),
        (Venue::Polymarket, Side::No, "Polymarket NO: "),
        (Venue::Kalshi, Side::Yes, "Kalshi YES:    "),
        (Venue::Kalshi, Side::No, "Kalshi NO:     "),
    ];
    for (venue, side, title) in rows {
        let Some(quote) = book.quote(venue, side) else {
            continue;
        };
        match &quote.token_id {
            Some(token) => writeln!(out, "  {title} {:.4} (token_id={token})", quote.ask)?,
            None => writeln!(out, "  {title} {:.4}", quote.ask)?,
        }
    }
    Ok(())
}

fn write_best_leg(out: &mut String, label: &str, leg: &Leg, contracts: u32) -> std::fmt::Result {
    writeln!(
        out,
        "  Team {label}: {} {} @ {:.4}",
        leg.venue(),
        leg.quote.side,
        leg.ask()
    )?;
    if let Some(fee) = leg.fee {
        let unit = if contracts == 1 { "contract" } else { "contracts" };
        writeln!(
            out,
            "    {} fee ({contracts} {unit}): ${fee:.4} per contract",
            leg.venue()
        )?;
    }
    if let Some(token) = &leg.quote.token_id {
        writeln!(out, "    Token ID: {token}")?;
    }
    Ok(())
}

fn write_unmatched(out: &mut String, report: &ScanReport) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(
        out,
        "{} Could not match some teams in Kalshi markets:",
        "⚠".if_supports_color(Stream::Stderr, |t| t.yellow())
    )?;
    writeln!(out, "   Unmatched teams: {}", report.unmatched.join(", "))?;
    writeln!(out, "   Available Kalshi markets:")?;
    for (idx, market) in report.kalshi_markets.iter().enumerate() {
        writeln!(
            out,
            "     {}. yes_sub_title: \"{}\" (YES: {}, NO: {})",
            idx + 1,
            market.label.as_deref().unwrap_or_default(),
            price_or_dash(market.yes_ask),
            price_or_dash(market.no_ask)
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    let title = format!("=== {title} ===");
    writeln!(out, "{}", title.if_supports_color(Stream::Stdout, |t| t.bold()))
}

fn styled_name(combo: &Combination) -> String {
    combo
        .name()
        .if_supports_color(Stream::Stdout, |t| t.cyan())
        .to_string()
}

fn leg_summary(leg: &Leg) -> String {
    let mut summary = format!("{} {} @ {:.4}", leg.venue(), leg.quote.side, leg.ask());
    if let Some(fee) = leg.fee {
        let _ = write!(summary, " (fee: ${fee:.4})");
    }
    summary
}

fn mark(edge: Decimal) -> &'static str {
    if edge > Decimal::ZERO {
        "✅"
    } else {
        "❌"
    }
}

fn positive(value: impl Display) -> String {
    value
        .to_string()
        .if_supports_color(Stream::Stdout, |t| t.green())
        .to_string()
}

fn price_or_dash(price: Option<Decimal>) -> String {
    price.map_or_else(|| "-".to_string(), |p| format!("{p:.4}"))
}
