//! Sort modes offered by the sort selector.

use crate::store::Product;
use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Source order
    #[default]
    #[serde(rename = "default")]
    Unsorted,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-asc")]
    RatingAsc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
    /// Alphabetical by title
    #[serde(rename = "title")]
    Title,
}

impl SortMode {
    /// Returns all sort modes in selector order.
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Unsorted,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::RatingAsc,
            SortMode::RatingDesc,
            SortMode::Title,
        ]
    }

    /// Returns the identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            SortMode::Unsorted => "default",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::RatingAsc => "rating-asc",
            SortMode::RatingDesc => "rating-desc",
            SortMode::Title => "title",
        }
    }

    /// Returns the label shown by the sort selector.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Unsorted => "Sort By",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::RatingAsc => "Rating: Low to High",
            SortMode::RatingDesc => "Rating: High to Low",
            SortMode::Title => "Title: A-Z",
        }
    }

    /// Compares two products under this mode. `Unsorted` treats everything as equal.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortMode::Unsorted => Ordering::Equal,
            SortMode::PriceAsc => a.price.total_cmp(&b.price),
            SortMode::PriceDesc => b.price.total_cmp(&a.price),
            SortMode::RatingAsc => a.rate().total_cmp(&b.rate()),
            SortMode::RatingDesc => b.rate().total_cmp(&a.rate()),
            SortMode::Title => compare_titles(&a.title, &b.title),
        }
    }

    /// Returns a sorted copy of the sequence. The sort is stable.
    pub fn sort<'a>(&self, products: &[&'a Product]) -> Vec<&'a Product> {
        let mut sorted = products.to_vec();
        if *self != SortMode::Unsorted {
            sorted.sort_by(|a, b| self.compare(a, b));
        }
        sorted
    }
}

thread_local! {
    static TITLE_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Root-locale collation: accents and case are secondary to the base letters,
/// lowercase before uppercase on ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    TITLE_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortMode::all().iter().copied().find(|mode| mode.id() == wanted).ok_or_else(|| {
            let ids: Vec<&str> = SortMode::all().iter().map(|m| m.id()).collect();
            format!("Unknown sort mode: {}. Use: {}", s, ids.join(", "))
        })
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
