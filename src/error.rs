use miette::Diagnostic;
use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(
        code(gamescan::config),
        help("check the config file and GAMESCAN_* environment variables")
    )]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(gamescan::data))]
    Domain(#[from] DomainError),

    #[error("{status} for {url}\n{body}")]
    #[diagnostic(
        code(gamescan::http::status),
        help("verify the event slug and ticker exist on each venue")
    )]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("HTTP error: {0}")]
    #[diagnostic(code(gamescan::http))]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    #[diagnostic(code(gamescan::json))]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(gamescan::io))]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    #[diagnostic(code(gamescan::url))]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
