//! Errors raised while fetching the catalog.

use thiserror::Error;

/// Failure to retrieve the product list from the remote source.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be built (bad proxy URL, TLS setup).
    #[error("failed to configure HTTP client: {0}")]
    Client(#[source] wreq::Error),

    /// The request never produced a response.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: wreq::Error,
    },

    /// The source answered with a non-success status.
    #[error("product source returned status {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] wreq::Error),

    /// The body was not a JSON array of products.
    #[error("failed to decode product list: {0}")]
    Decode(#[from] serde_json::Error),
}
