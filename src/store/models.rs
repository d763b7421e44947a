//! Product records as served by the remote catalog endpoint.

use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Every field falls back to its default when missing so a single malformed
/// record does not reject the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Unique identifier, used as the card key
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Long description (not shown on cards)
    pub description: String,
    /// Category name (not shown on cards)
    pub category: String,
    /// Product image URL
    pub image: String,
    /// Rating and review count
    pub rating: Rating,
}

impl Product {
    /// Creates a product with the fields shown on a card.
    pub fn new(id: u64, title: impl Into<String>, price: f64, rating: Rating) -> Self {
        Self { id, title: title.into(), price, rating, ..Self::default() }
    }

    /// Returns the average rating.
    pub fn rate(&self) -> f64 {
        self.rating.rate
    }
}

/// Product rating and review count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// Average rating
    pub rate: f64,
    /// Number of ratings
    pub count: u64,
}

impl Rating {
    /// Creates a new rating.
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new() {
        let product = Product::new(1, "Shirt", 20.0, Rating::new(4.0, 10));
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.price, 20.0);
        assert_eq!(product.rate(), 4.0);
        assert_eq!(product.rating.count, 10);
        assert!(product.description.is_empty());
        assert!(product.image.is_empty());
    }

    #[test]
    fn test_product_deserialize_full_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert!(product.title.starts_with("Fjallraven"));
        assert_eq!(product.price, 109.95);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Rating::new(3.9, 120));
    }

    #[test]
    fn test_product_deserialize_missing_fields() {
        let product: Product = serde_json::from_str(r#"{ "id": 7, "title": "Bare" }"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.title, "Bare");
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating, Rating::default());

        let product: Product =
            serde_json::from_str(r#"{ "id": 8, "rating": { "rate": 4.1 } }"#).unwrap();
        assert_eq!(product.rating.rate, 4.1);
        assert_eq!(product.rating.count, 0);
    }

    #[test]
    fn test_product_deserialize_integer_price() {
        let product: Product = serde_json::from_str(r#"{ "id": 1, "price": 20 }"#).unwrap();
        assert_eq!(product.price, 20.0);
    }

    #[test]
    fn test_product_serde() {
        let product = Product::new(3, "Mens Cotton Jacket", 55.99, Rating::new(4.7, 500));
        let json = serde_json::to_string(&product).unwrap();
        assert!(json.contains("Mens Cotton Jacket"));
        assert!(json.contains("\"rate\":4.7"));

        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }
}
