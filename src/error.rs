//! Error types for the folio library.

use thiserror::Error;

/// The main error type for folio.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Market-data endpoint errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Unexpected or missing data in a market-data response
    #[error("Market data error: {0}")]
    MarketData(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ledger storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new market-data error.
    pub fn market_data(msg: impl Into<String>) -> Self {
        Self::MarketData(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if this error is recoverable (the caller can retry).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::MarketData(_))
    }
}
