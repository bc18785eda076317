//! Venue API endpoints.

use serde::Deserialize;
use url::Url;

use crate::error::{ConfigError, Result};

pub const DEFAULT_GAMMA_URL: &str = "https://gamma-api.polymarket.com";
pub const DEFAULT_CLOB_URL: &str = "https://clob.polymarket.com";
pub const DEFAULT_KALSHI_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";

/// Base URLs for the three APIs a scan reads from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Polymarket Gamma API (events).
    pub gamma_url: String,
    /// Polymarket CLOB API (prices).
    pub clob_url: String,
    /// Kalshi trade API.
    pub kalshi_url: String,
}

impl NetworkConfig {
    /// Parsed Gamma API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the URL is not a valid
    /// `http(s)` URL.
    pub fn gamma(&self) -> Result<Url> {
        parse_base("network.gamma_url", &self.gamma_url)
    }

    /// Parsed CLOB API root.
    ///
    /// # Errors
    ///
    /// See [`NetworkConfig::gamma`].
    pub fn clob(&self) -> Result<Url> {
        parse_base("network.clob_url", &self.clob_url)
    }

    /// Parsed Kalshi API root.
    ///
    /// # Errors
    ///
    /// See [`NetworkConfig::gamma`].
    pub fn kalshi(&self) -> Result<Url> {
        parse_base("network.kalshi_url", &self.kalshi_url)
    }

    pub(super) fn validate(&self) -> Result<()> {
        self.gamma()?;
        self.clob()?;
        self.kalshi()?;
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            gamma_url: DEFAULT_GAMMA_URL.into(),
            clob_url: DEFAULT_CLOB_URL.into(),
            kalshi_url: DEFAULT_KALSHI_URL.into(),
        }
    }
}

fn parse_base(field: &'static str, raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }

    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{other}'"),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let network = NetworkConfig::default();
        assert!(network.validate().is_ok());
        assert_eq!(network.kalshi().unwrap().path(), "/trade-api/v2");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let network = NetworkConfig {
            clob_url: "wss://ws-subscriptions-clob.polymarket.com/ws/market".into(),
            ..NetworkConfig::default()
        };
        assert!(network.validate().is_err());
    }

    #[test]
    fn rejects_empty_url() {
        let network = NetworkConfig {
            gamma_url: "  ".into(),
            ..NetworkConfig::default()
        };
        assert!(network.validate().is_err());
    }
}
