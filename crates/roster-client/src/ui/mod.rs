//! Terminal rendering of client state.
//!
//! Every component renders to a `String`; input capture lives with the
//! interactive driver.

pub mod alert;
pub mod form;
pub mod modal;
pub mod search;
pub mod table;

pub use alert::MessageAlert;
pub use form::{EmployeeForm, Field};
pub use modal::EditModal;
pub use search::SearchBar;
pub use table::EmployeeTable;

use owo_colors::OwoColorize;

use crate::book::BookState;

/// Page title.
pub const TITLE: &str = "Employee Manager";

/// Heading over the table, with the number of listed employees.
pub fn list_heading(count: usize) -> String {
    format!("Current Employees ({count})")
}

/// Full list view: title, heading, search bar and table.
pub fn render_page(state: &BookState) -> String {
    format!(
        "{}\n\n{}\n{}\n\n{}",
        TITLE.bold(),
        list_heading(state.employees.len()),
        SearchBar::render(&state.search_term),
        EmployeeTable::render(state),
    )
}
