//! The catalog controller: owns all viewer state and derives the visible page.

use super::pagination::Pagination;
use super::search::{Filter, TitleFilter};
use super::sort::SortMode;
use crate::store::{Product, ProductSource};
use serde::Serialize;
use tracing::{debug, error, info};

/// Outcome of the one-shot catalog fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loaded,
    Failed,
}

/// A user interaction fed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The search box changed.
    Search(String),
    /// A sort option was chosen.
    Sort(SortMode),
    /// A numbered page button was clicked.
    GoToPage(usize),
    PrevPage,
    NextPage,
}

/// What the renderers get: the current page and where it sits.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    pub search_term: String,
    pub sort_mode: SortMode,
}

impl CatalogView {
    /// Returns the total number of pages.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }
}

/// Single owner of the fetched catalog and every piece of interactive state.
#[derive(Debug)]
pub struct CatalogController {
    products: Vec<Product>,
    search_term: String,
    sort_mode: SortMode,
    current_page: usize,
    reset_page_on_change: bool,
    load_state: LoadState,
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogController {
    /// Creates an empty controller on page 1.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            search_term: String::new(),
            sort_mode: SortMode::default(),
            current_page: 1,
            reset_page_on_change: false,
            load_state: LoadState::NotStarted,
        }
    }

    /// Sets the initial sort mode.
    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Jumps back to page 1 whenever the search term or sort mode changes.
    pub fn with_reset_page_on_change(mut self, enabled: bool) -> Self {
        self.reset_page_on_change = enabled;
        self
    }

    /// Fetches the catalog once.
    ///
    /// A failed fetch is logged and otherwise ignored: the product set keeps
    /// its previous contents. Later calls do nothing.
    pub async fn load<S: ProductSource + ?Sized>(&mut self, source: &S) -> LoadState {
        if self.load_state != LoadState::NotStarted {
            debug!("Catalog already fetched ({:?}), skipping", self.load_state);
            return self.load_state;
        }

        self.load_state = match source.fetch_products().await {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                self.products = products;
                LoadState::Loaded
            }
            Err(e) => {
                error!("Error fetching products from source: {}", e);
                LoadState::Failed
            }
        };

        self.load_state
    }

    /// Applies one user interaction.
    pub fn dispatch(&mut self, event: CatalogEvent) {
        debug!("Event: {:?}", event);

        match event {
            CatalogEvent::Search(term) => self.set_search_term(term),
            CatalogEvent::Sort(mode) => self.set_sort_mode(mode),
            CatalogEvent::GoToPage(page) => self.go_to_page(page),
            CatalogEvent::PrevPage => self.current_page = self.pagination().prev(),
            CatalogEvent::NextPage => self.current_page = self.pagination().next(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        if self.reset_page_on_change {
            self.current_page = 1;
        }
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        if self.reset_page_on_change {
            self.current_page = 1;
        }
    }

    /// Moves to a page, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = self.pagination().clamp(page);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Products whose title contains the search term.
    pub fn filtered(&self) -> Vec<&Product> {
        let filter = TitleFilter::new(&self.search_term);
        let matched = filter.apply(&self.products);
        let total = self.products.len();
        debug!("{}: {} of {} products", filter.description(), matched.len(), total);
        matched
    }

    /// Filtered products in the current sort order.
    pub fn sorted(&self) -> Vec<&Product> {
        self.sort_mode.sort(&self.filtered())
    }

    /// Pagination over the filtered, sorted catalog.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page, self.filtered().len())
    }

    /// Derives the page to render from the current state.
    pub fn view(&self) -> CatalogView {
        let sorted = self.sorted();
        let pagination = Pagination::new(self.current_page, sorted.len());
        let products = pagination.slice(&sorted).iter().map(|p| (*p).clone()).collect();

        CatalogView {
            products,
            pagination,
            search_term: self.search_term.clone(),
            sort_mode: self.sort_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FetchError, Rating};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Mock product source for testing.
    struct MockSource {
        products: Option<Vec<Product>>,
        calls: AtomicU32,
    }

    impl MockSource {
        fn ok(products: Vec<Product>) -> Self {
            Self { products: Some(products), calls: AtomicU32::new(0) }
        }

        fn failing() -> Self {
            Self { products: None, calls: AtomicU32::new(0) }
        }

        fn call_count(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductSource for MockSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.products.clone().ok_or(FetchError::Status(500))
        }
    }

    fn shirt_and_shoe() -> Vec<Product> {
        vec![
            Product::new(1, "Shirt", 20.0, Rating::new(4.0, 10)),
            Product::new(2, "Shoe", 10.0, Rating::new(3.0, 5)),
        ]
    }

    fn numbered(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|i| Product::new(i, format!("Item {:02}", i), i as f64, Rating::new(3.0, i)))
            .collect()
    }

    fn loaded(products: Vec<Product>) -> CatalogController {
        let mut controller = CatalogController::new();
        controller.products = products;
        controller.load_state = LoadState::Loaded;
        controller
    }

    fn titles(view: &CatalogView) -> Vec<&str> {
        view.products.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let controller = CatalogController::new();
        assert!(controller.products().is_empty());
        assert_eq!(controller.search_term(), "");
        assert_eq!(controller.sort_mode(), SortMode::Unsorted);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.load_state(), LoadState::NotStarted);
    }

    #[tokio::test]
    async fn test_load_success() {
        let source = MockSource::ok(shirt_and_shoe());
        let mut controller = CatalogController::new();

        assert_eq!(controller.load(&source).await, LoadState::Loaded);
        assert_eq!(controller.products().len(), 2);
        assert_eq!(titles(&controller.view()), vec!["Shirt", "Shoe"]);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_catalog_empty() {
        let source = MockSource::failing();
        let mut controller = CatalogController::new();

        assert_eq!(controller.load(&source).await, LoadState::Failed);
        assert!(controller.products().is_empty());

        let view = controller.view();
        assert!(view.products.is_empty());
        assert_eq!(view.total_pages(), 0);
    }

    #[tokio::test]
    async fn test_load_runs_once() {
        let source = MockSource::ok(shirt_and_shoe());
        let mut controller = CatalogController::new();

        controller.load(&source).await;
        controller.load(&source).await;
        assert_eq!(source.call_count(), 1);

        let failing = MockSource::failing();
        let mut controller = CatalogController::new();
        controller.load(&failing).await;
        assert_eq!(controller.load(&failing).await, LoadState::Failed);
        assert_eq!(failing.call_count(), 1);
    }

    #[test]
    fn test_sort_scenarios() {
        let mut controller = loaded(shirt_and_shoe());

        controller.dispatch(CatalogEvent::Sort(SortMode::PriceAsc));
        assert_eq!(titles(&controller.view()), vec!["Shoe", "Shirt"]);

        controller.dispatch(CatalogEvent::Sort(SortMode::Title));
        assert_eq!(titles(&controller.view()), vec!["Shirt", "Shoe"]);
    }

    #[test]
    fn test_search_scenarios() {
        let mut controller = loaded(shirt_and_shoe());

        controller.dispatch(CatalogEvent::Search("sh".to_string()));
        assert_eq!(controller.view().products.len(), 2);

        controller.dispatch(CatalogEvent::Search("zzz".to_string()));
        assert!(controller.view().products.is_empty());

        controller.dispatch(CatalogEvent::Search(String::new()));
        assert_eq!(controller.view().products.len(), 2);
    }

    #[test]
    fn test_sort_applies_to_filtered_set() {
        let mut controller = loaded(vec![
            Product::new(1, "Red Shirt", 30.0, Rating::new(4.0, 1)),
            Product::new(2, "Hat", 5.0, Rating::new(4.0, 1)),
            Product::new(3, "Blue Shirt", 15.0, Rating::new(4.0, 1)),
        ]);

        controller.dispatch(CatalogEvent::Search("SHIRT".to_string()));
        controller.dispatch(CatalogEvent::Sort(SortMode::PriceAsc));
        assert_eq!(titles(&controller.view()), vec!["Blue Shirt", "Red Shirt"]);
    }

    #[test]
    fn test_empty_and_match_all_search_agree() {
        let mut controller = loaded(numbered(15));
        controller.dispatch(CatalogEvent::Sort(SortMode::PriceDesc));

        let unfiltered: Vec<u64> = controller.sorted().iter().map(|p| p.id).collect();
        controller.dispatch(CatalogEvent::Search("item".to_string()));
        let filtered: Vec<u64> = controller.sorted().iter().map(|p| p.id).collect();

        assert_eq!(unfiltered, filtered);
    }

    #[test]
    fn test_paging_through_twenty_five() {
        let mut controller = loaded(numbered(25));

        let view = controller.view();
        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.products.len(), 10);
        assert!(view.pagination.prev_disabled());

        controller.dispatch(CatalogEvent::NextPage);
        controller.dispatch(CatalogEvent::NextPage);
        let view = controller.view();
        assert_eq!(controller.current_page(), 3);
        assert_eq!(view.products.len(), 5);
        assert_eq!(view.products[0].id, 21);
        assert_eq!(view.products[4].id, 25);
        assert!(view.pagination.next_disabled());

        controller.dispatch(CatalogEvent::NextPage);
        assert_eq!(controller.current_page(), 3);

        controller.dispatch(CatalogEvent::PrevPage);
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let mut controller = loaded(numbered(25));

        controller.dispatch(CatalogEvent::GoToPage(9));
        assert_eq!(controller.current_page(), 3);

        controller.dispatch(CatalogEvent::GoToPage(0));
        assert_eq!(controller.current_page(), 1);

        let mut empty = CatalogController::new();
        empty.dispatch(CatalogEvent::GoToPage(4));
        assert_eq!(empty.current_page(), 1);
        empty.dispatch(CatalogEvent::NextPage);
        assert_eq!(empty.current_page(), 1);
    }

    #[test]
    fn test_page_kept_when_search_shrinks_results() {
        let mut controller = loaded(numbered(25));
        controller.dispatch(CatalogEvent::GoToPage(3));

        controller.dispatch(CatalogEvent::Search("item 0".to_string()));
        let view = controller.view();
        assert_eq!(controller.current_page(), 3);
        assert_eq!(view.total_pages(), 1);
        assert!(view.products.is_empty());

        controller.dispatch(CatalogEvent::PrevPage);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.view().products.len(), 9);
    }

    #[test]
    fn test_reset_page_on_change() {
        let mut controller = loaded(numbered(25)).with_reset_page_on_change(true);
        controller.dispatch(CatalogEvent::GoToPage(3));

        controller.dispatch(CatalogEvent::Search("item 0".to_string()));
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.view().products.len(), 9);

        controller.dispatch(CatalogEvent::Search(String::new()));
        controller.dispatch(CatalogEvent::GoToPage(2));
        controller.dispatch(CatalogEvent::Sort(SortMode::Title));
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_with_sort() {
        let controller = loaded(shirt_and_shoe()).with_sort(SortMode::PriceAsc);
        let view = controller.view();
        assert_eq!(view.sort_mode, SortMode::PriceAsc);
        assert_eq!(titles(&view), vec!["Shoe", "Shirt"]);
    }

    #[test]
    fn test_view_does_not_touch_products() {
        let mut controller = loaded(shirt_and_shoe());
        controller.dispatch(CatalogEvent::Sort(SortMode::PriceAsc));
        let _ = controller.view();

        let ids: Vec<u64> = controller.products().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
