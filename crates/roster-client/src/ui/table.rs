//! Employee table with its loading, error and empty states.

use owo_colors::OwoColorize;
use roster_core::Employee;
use tabled::{Table, Tabled};

use crate::book::BookState;

#[derive(Tabled)]
struct EmployeeRow<'a> {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Position")]
    position: &'a str,
}

impl<'a> From<&'a Employee> for EmployeeRow<'a> {
    fn from(e: &'a Employee) -> Self {
        Self {
            id: e.id.get(),
            name: &e.name,
            email: &e.email,
            position: &e.position,
        }
    }
}

/// List view body.
pub struct EmployeeTable;

impl EmployeeTable {
    /// Render whichever state applies, checked in order: error, loading,
    /// empty, populated.
    pub fn render(state: &BookState) -> String {
        if let Some(error) = &state.error {
            return format!("{}\n{error}", "Error".red().bold());
        }
        if state.loading {
            return "Loading employees...".to_string();
        }
        if state.employees.is_empty() {
            return Self::empty_message(&state.search_term);
        }
        Table::new(state.employees.iter().map(EmployeeRow::from)).to_string()
    }

    /// What to show when nothing is listed.
    pub fn empty_message(search_term: &str) -> String {
        if search_term.is_empty() {
            "No employees have been added yet.".to_string()
        } else {
            format!("No employees found matching \"{search_term}\".")
        }
    }
}
