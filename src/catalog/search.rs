//! Title search filtering.

use crate::store::Product;

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;

    /// Returns the products passing the filter, in their original order.
    fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Case-insensitive substring match on the product title.
pub struct TitleFilter {
    term: String,
}

impl TitleFilter {
    /// Creates a filter for the given search term.
    pub fn new(term: &str) -> Self {
        Self { term: term.to_lowercase() }
    }

    /// Returns true if the filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

impl Filter for TitleFilter {
    fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.title.to_lowercase().contains(&self.term)
    }

    fn description(&self) -> String {
        if self.is_empty() {
            "Title: any".to_string()
        } else {
            format!("Title contains: {}", self.term)
        }
    }
}
