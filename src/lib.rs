//! product-catalog - Terminal product catalog viewer
//!
//! Fetches a product list from a REST endpoint once, then filters by title,
//! sorts by price, rating or title, and pages through the results locally.

pub mod catalog;
pub mod commands;
pub mod config;
pub mod format;
pub mod store;

pub use catalog::{CatalogController, CatalogEvent, CatalogView, SortMode};
pub use config::Config;
pub use store::{FetchError, Product, ProductSource, Rating};
