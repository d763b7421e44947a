//! Remote product source: HTTP client, error type, and product records.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ProductSource, StoreClient};
pub use error::FetchError;
pub use models::{Product, Rating};
