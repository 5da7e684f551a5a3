//! # Error Types
//!
//! Every failure in a conversion run is a [`ConvertError`]. Callers decide
//! whether to keep going with [`ConvertError::is_recoverable`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid date \"{0}\": expected \"latest\" or YYYY-MM-DD")]
    InvalidDate(String),

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response document: {0}")]
    Document(String),

    #[error("Invalid currency name: {0}")]
    InvalidCurrency(String),

    #[error("no rate from {from} to {to}")]
    MissingRate { from: String, to: String },

    #[error("rate from {from} to {to} is not a number")]
    InvalidRate { from: String, to: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Errors that only affect a single currency pair.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCurrency(_) | Self::MissingRate { .. } | Self::InvalidRate { .. }
        )
    }

    /// Errors that warrant retrying the request against the mirror host.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Status { .. })
    }
}
