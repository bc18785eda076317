//! Team alias datasets.

use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

use crate::domain::AliasTable;
use crate::error::{ConfigError, Result};

/// Extra alias files layered on top of the built-in NFL table.
///
/// Each file uses the same layout as the built-in dataset:
///
/// ```toml
/// league = "nba"
///
/// [teams]
/// "Lakers" = ["Los Angeles", "LA Lakers"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AliasConfig {
    pub files: Vec<PathBuf>,
}

impl AliasConfig {
    /// Build the alias table: built-in entries first, then each file in order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a file cannot be read or parsed.
    pub fn load_table(&self) -> Result<AliasTable> {
        let mut table = AliasTable::builtin().map_err(|source| ConfigError::Parse {
            path: "<builtin nfl aliases>".into(),
            source,
        })?;

        for path in &self.files {
            let shown = path.display().to_string();
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
                path: shown.clone(),
                source,
            })?;
            let extra = AliasTable::from_toml(&content).map_err(|source| ConfigError::Parse {
                path: shown.clone(),
                source,
            })?;
            debug!(path = %shown, teams = extra.len(), "Loaded alias file");
            table.merge(extra);
        }

        Ok(table)
    }
}
