//! Error types for the price poller
//!
//! Request-level failures are `ExchangeError`; run-level failures are `PollError`.

use thiserror::Error;

/// Failure of a single request against the exchange
#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),
}

/// Failures that end a polling run
#[derive(Error, Debug)]
pub enum PollError {
    #[error("Catalog fetch failed: {0}")]
    Catalog(#[from] ExchangeError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExchangeError {
    /// HTTP status code, when the exchange answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ExchangeError::Http { status, .. } => Some(*status),
            ExchangeError::Network(e) => e.status().map(|s| s.as_u16()),
            ExchangeError::Deserialization(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for PollError {
    fn from(err: serde_yaml::Error) -> Self {
        PollError::Config(err.to_string())
    }
}

impl From<std::io::Error> for PollError {
    fn from(err: std::io::Error) -> Self {
        PollError::Config(err.to_string())
    }
}
