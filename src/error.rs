//! Error types for verse search.

use thiserror::Error;

/// Everything that can go wrong between submitting a query and holding parsed verses.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Transport-level failure (DNS, TLS, connection reset, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("search endpoint returned status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("could not decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
