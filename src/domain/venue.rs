//! Venues and contract sides.

use std::fmt;

use serde::Serialize;

/// A prediction-market venue taking part in a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Venue {
    /// Decentralized order-book market. Fees are not modelled.
    Polymarket,
    /// Centralized exchange charging a taker fee per contract.
    Kalshi,
}

impl Venue {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Polymarket => "Polymarket",
            Self::Kalshi => "Kalshi",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which side of a team's binary contract is bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// The team wins.
    Yes,
    /// The team does not win.
    No,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("YES"),
            Self::No => f.write_str("NO"),
        }
    }
}
