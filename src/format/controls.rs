//! Sort selector and pagination bar rendering.

use crate::catalog::{Pagination, SortMode};

/// One button of the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageButton {
    pub label: String,
    /// Page a click on this button moves to
    pub target: usize,
    pub disabled: bool,
    /// Highlighted as the page being shown
    pub active: bool,
}

impl PageButton {
    fn render(&self) -> String {
        if self.disabled {
            format!("({})", self.label)
        } else if self.active {
            format!("[{}]", self.label)
        } else {
            self.label.clone()
        }
    }
}

/// Builds the "Prev", numbered and "Next" buttons for the current page.
pub fn pagination_buttons(pagination: &Pagination) -> Vec<PageButton> {
    let mut buttons = Vec::with_capacity(pagination.total_pages() + 2);

    buttons.push(PageButton {
        label: "Prev".to_string(),
        target: pagination.prev(),
        disabled: pagination.prev_disabled(),
        active: false,
    });

    for page in 1..=pagination.total_pages() {
        buttons.push(PageButton {
            label: page.to_string(),
            target: page,
            disabled: false,
            active: page == pagination.current_page,
        });
    }

    buttons.push(PageButton {
        label: "Next".to_string(),
        target: pagination.next(),
        disabled: pagination.next_disabled(),
        active: false,
    });

    buttons
}

/// Renders the pagination bar, e.g. `(Prev) [1] 2 3 Next`.
pub fn render_pagination(pagination: &Pagination) -> String {
    pagination_buttons(pagination).iter().map(PageButton::render).collect::<Vec<_>>().join(" ")
}

/// Renders the sort selector with the current choice marked.
pub fn render_sort_selector(current: SortMode) -> String {
    let id_width = 12;

    SortMode::all()
        .iter()
        .map(|mode| {
            let marker = if *mode == current { ">" } else { " " };
            format!("{} {:<id_width$} {}", marker, mode.id(), mode.label())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
