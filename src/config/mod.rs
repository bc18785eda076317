//! Application configuration loading and validation.
//!
//! Configuration is an optional TOML file; every section has defaults, so a
//! scan runs with no file at all. API roots can be overridden from the
//! environment (or a `.env` file) with `GAMESCAN_GAMMA_URL`,
//! `GAMESCAN_CLOB_URL` and `GAMESCAN_KALSHI_URL`.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::domain::FeeSchedule;
use crate::error::{ConfigError, Result};

mod aliases;
mod logging;
mod network;

pub use aliases::AliasConfig;
pub use logging::LoggingConfig;
pub use network::{NetworkConfig, DEFAULT_CLOB_URL, DEFAULT_GAMMA_URL, DEFAULT_KALSHI_URL};

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "gamescan.toml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Venue fee parameters.
    #[serde(default)]
    pub fees: FeeSchedule,
    #[serde(default)]
    pub aliases: AliasConfig,
}

impl Config {
    /// Load, apply environment overrides and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// a value is invalid.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Load `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else
    /// the defaults.
    ///
    /// # Errors
    ///
    /// An explicit `path` that cannot be read is an error; a missing default
    /// file is not.
    #[allow(clippy::result_large_err)]
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::load(fallback);
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Replace API roots with `GAMESCAN_*` environment variables when set.
    pub fn apply_env_overrides(&mut self) {
        let overrides = [
            ("GAMESCAN_GAMMA_URL", &mut self.network.gamma_url),
            ("GAMESCAN_CLOB_URL", &mut self.network.clob_url),
            ("GAMESCAN_KALSHI_URL", &mut self.network.kalshi_url),
        ];
        for (var, slot) in overrides {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    debug!(var, value = %value, "Environment override");
                    *slot = value;
                }
            }
        }
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        self.network.validate()?;

        let rate = self.fees.kalshi_taker_rate;
        if rate.is_sign_negative() || rate > rust_decimal::Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "fees.kalshi_taker_rate",
                reason: format!("{rate} is outside [0, 1]"),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.network.gamma_url, DEFAULT_GAMMA_URL);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.fees.kalshi_taker_rate, dec!(0.07));
        assert!(config.aliases.files.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sections_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            [network]
            kalshi_url = "http://127.0.0.1:9000/trade-api/v2"

            [logging]
            level = "debug"
            format = "json"

            [fees]
            kalshi_taker_rate = "0.035"

            [aliases]
            files = ["nba.toml"]
            "#,
        )
        .unwrap();

        assert_eq!(config.network.clob_url, DEFAULT_CLOB_URL);
        assert_eq!(config.network.kalshi_url, "http://127.0.0.1:9000/trade-api/v2");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.fees.kalshi_taker_rate, dec!(0.035));
        assert_eq!(config.aliases.files.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_fee_rate_above_one() {
        let config: Config = toml::from_str("[fees]\nkalshi_taker_rate = \"1.5\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let config: Config = toml::from_str("[logging]\nformat = \"xml\"").unwrap();
        assert!(config.validate().is_err());
    }
}
