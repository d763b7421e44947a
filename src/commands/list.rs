//! List command: render one page of the catalog and exit.

use crate::catalog::{CatalogController, CatalogEvent, SortMode};
use crate::config::Config;
use crate::format::Formatter;
use crate::store::{ProductSource, StoreClient};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Search, sort and page requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    /// Overrides the configured sort mode
    pub sort: Option<SortMode>,
    pub page: usize,
}

/// Renders a single page of the derived catalog.
pub struct ListCommand {
    config: Config,
}

impl ListCommand {
    /// Creates a new list command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches the catalog and returns the formatted page.
    pub async fn execute(&self, options: &ListOptions) -> Result<String> {
        let client = StoreClient::new(&self.config).context("Failed to create HTTP client")?;
        debug!("Catalog endpoint: {}", client.endpoint());

        self.execute_with_source(&client, options).await
    }

    /// Executes against a provided source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl ProductSource,
        options: &ListOptions,
    ) -> Result<String> {
        let sort = options.sort.unwrap_or(self.config.sort);
        let mut controller = CatalogController::new().with_sort(sort);
        controller.load(source).await;

        if let Some(term) = &options.search {
            controller.dispatch(CatalogEvent::Search(term.clone()));
        }
        if options.page > 1 {
            controller.dispatch(CatalogEvent::GoToPage(options.page));
        }

        let view = controller.view();
        if view.pagination.current_page != options.page.max(1) {
            debug!("Requested page {} clamped to {}", options.page, view.pagination.current_page);
        }

        info!(
            "Showing page {} of {} ({} matching products)",
            view.pagination.current_page,
            view.total_pages(),
            view.pagination.total_items
        );

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_view(&view))
    }
}
