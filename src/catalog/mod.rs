//! Catalog state and the pure derivations behind the visible page.

pub mod controller;
pub mod pagination;
pub mod search;
pub mod sort;

pub use controller::{CatalogController, CatalogEvent, CatalogView, LoadState};
pub use pagination::{Pagination, PAGE_SIZE};
pub use search::{Filter, TitleFilter};
pub use sort::SortMode;
