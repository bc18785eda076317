//! Team alias dataset and alias generation.
//!
//! Kalshi labels teams by city ("Green Bay") where Polymarket uses the
//! nickname ("Packers"). The nickname-to-spellings mapping is data, loaded
//! from TOML files shaped like `data/aliases/nfl.toml`:
//!
//! ```toml
//! league = "nfl"
//!
//! [teams]
//! "Packers" = ["Green Bay", "Green Bay Packers"]
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::normalize::{canonicalize, replace_word};

const BUILTIN_NFL: &str = include_str!("../../data/aliases/nfl.toml");

#[derive(Debug, Deserialize)]
struct AliasFile {
    #[serde(default)]
    league: Option<String>,
    #[serde(default)]
    teams: HashMap<String, Vec<String>>,
}

/// Nickname to alternate-spelling lookup, merged from one or more datasets.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    leagues: Vec<String>,
    teams: HashMap<String, Vec<String>>,
    /// Canonical key -> original key, for lookups that differ only in case or
    /// punctuation.
    canonical_keys: HashMap<String, String>,
}

impl AliasTable {
    /// The dataset shipped with the binary (NFL).
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the embedded dataset is malformed.
    pub fn builtin() -> Result<Self, toml::de::Error> {
        Self::from_toml(BUILTIN_NFL)
    }

    /// Parse one dataset.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if `source` is not a valid alias dataset.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        let file: AliasFile = toml::from_str(source)?;
        let mut table = Self::default();
        table.leagues.extend(file.league);
        for (team, aliases) in file.teams {
            table.insert(team, aliases);
        }
        Ok(table)
    }

    /// Add aliases for a team, appending to any already present.
    pub fn insert(&mut self, team: impl Into<String>, aliases: impl IntoIterator<Item = String>) {
        let team = team.into();
        self.canonical_keys
            .entry(canonicalize(&team))
            .or_insert_with(|| team.clone());
        let entry = self.teams.entry(team).or_default();
        for alias in aliases {
            if !entry.contains(&alias) {
                entry.push(alias);
            }
        }
    }

    /// Fold another dataset into this one.
    pub fn merge(&mut self, other: Self) {
        for league in other.leagues {
            if !self.leagues.contains(&league) {
                self.leagues.push(league);
            }
        }
        for (team, aliases) in other.teams {
            self.insert(team, aliases);
        }
    }

    /// Aliases for a team label: exact key first, then canonical key.
    #[must_use]
    pub fn lookup(&self, team: &str) -> &[String] {
        if let Some(aliases) = self.teams.get(team) {
            return aliases;
        }
        self.canonical_keys
            .get(&canonicalize(team))
            .and_then(|key| self.teams.get(key))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn leagues(&self) -> &[String] {
        &self.leagues
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Expand a Polymarket team label into the spellings Kalshi might use.
///
/// The result keeps first-seen order with duplicates removed. It always holds
/// the trimmed label and its canonical form, so an unknown team still gets
/// matched on its own name.
#[must_use]
pub fn build_aliases(table: &AliasTable, team: &str) -> Vec<String> {
    let base = team.trim();
    let mut variants = Vec::new();
    let mut add = |variant: String| {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    };

    add(base.to_string());
    add(base.replace('.', ""));

    for alias in table.lookup(base) {
        add(alias.clone());
    }

    for short in ["St.", "St", "st.", "st"] {
        add(replace_word(base, "State", short, false));
    }
    add(replace_word(base, "St", "State", true));

    add(replace_word(base, "University", "U", false));
    add(replace_word(base, "Univ", "U", true));
    add(replace_word(base, "U", "University", false));

    add(canonicalize(base));

    variants
}
