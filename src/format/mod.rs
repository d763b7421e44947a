//! Output formatting for the product card list (table, JSON, markdown, CSV).

pub mod controls;

use crate::catalog::CatalogView;
use crate::config::OutputFormat;
use crate::store::Product;

pub use controls::{pagination_buttons, render_pagination, render_sort_selector, PageButton};

/// Message shown in place of the card list when nothing matches.
pub const EMPTY_MESSAGE: &str = "No products found.";

/// Formats products for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a list of products as cards, keyed by product id.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => EMPTY_MESSAGE.to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => self.json_products(products),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats a full page: controls, cards and the pagination bar.
    ///
    /// JSON carries the whole view; CSV carries only the page's rows.
    pub fn format_view(&self, view: &CatalogView) -> String {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
            }
            OutputFormat::Csv => self.format_products(&view.products),
            OutputFormat::Table | OutputFormat::Markdown => {
                let mut sections = Vec::new();

                let search = if view.search_term.is_empty() {
                    "(none)".to_string()
                } else {
                    format!("\"{}\"", view.search_term)
                };
                sections.push(format!("Search: {}  |  Sort: {}", search, view.sort_mode.label()));
                sections.push(self.format_products(&view.products));
                sections.push(render_pagination(&view.pagination));

                sections.join("\n\n")
            }
        }
    }

    // JSON formatting

    fn json_products(&self, products: &[Product]) -> String {
        serde_json::to_string_pretty(products).unwrap_or_else(|_| "[]".to_string())
    }

    // Table formatting

    fn table_card(&self, product: &Product) -> String {
        let mut lines = Vec::new();

        lines.push(format!("#{:<5} {}", product.id, product.title));
        lines.push(format!("       Price:  {}", price_label(product.price)));
        lines.push(format!(
            "       Rating: {} ({} ratings)",
            product.rating.rate, product.rating.count
        ));
        if !product.image.is_empty() {
            lines.push(format!("       Image:  {}", product.image));
        }

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let cards: Vec<String> = products.iter().map(|p| self.table_card(p)).collect();
        cards.join("\n\n")
    }

    // Markdown formatting

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Image | Title | Price | Rating | Count |".to_string());
        lines.push("|----|-------|-------|-------|--------|-------|".to_string());

        for product in products {
            let image = if product.image.is_empty() {
                String::new()
            } else {
                format!("![]({})", product.image)
            };

            lines.push(format!(
                "| {} | {} | {} | {} | {} | {} |",
                product.id,
                image,
                product.title.replace('|', "\\|"),
                price_label(product.price),
                product.rating.rate,
                product.rating.count
            ));
        }

        lines.join("\n")
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        "id,title,price,rate,count,category,image".to_string()
    }

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();
        lines.push(self.csv_header());

        for product in products {
            lines.push(format!(
                "{},{},{},{},{},{},{}",
                product.id,
                Self::csv_escape(&product.title),
                product.price,
                product.rating.rate,
                product.rating.count,
                Self::csv_escape(&product.category),
                Self::csv_escape(&product.image)
            ));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

/// Dollar-prefixed raw price: `20` stays `$20`, `109.95` stays `$109.95`.
pub fn price_label(price: f64) -> String {
    format!("${}", price)
}
