//! Search box.

use owo_colors::OwoColorize;

/// Name filter input.
pub struct SearchBar;

impl SearchBar {
    /// Placeholder shown while the filter is empty.
    pub const PLACEHOLDER: &'static str = "Search by name...";

    /// One-line rendering of the current filter.
    pub fn render(value: &str) -> String {
        if value.is_empty() {
            format!("Search: {}", Self::PLACEHOLDER.dimmed())
        } else {
            format!("Search: {value}")
        }
    }
}
