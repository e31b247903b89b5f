//! Edit dialog for one selected employee.

use owo_colors::OwoColorize;
use roster_core::{Employee, EmployeeDraft, EmployeeId};

use super::form::{Field, render_fields};

/// Edit dialog. Only visible while an employee is selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditModal {
    selected: Option<EmployeeId>,
    draft: EmployeeDraft,
}

impl EditModal {
    /// Closed dialog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open pre-filled from `employee`.
    pub fn open(&mut self, employee: &Employee) {
        self.selected = Some(employee.id);
        self.draft = employee.to_draft();
    }

    /// Close and forget the selection.
    pub fn close(&mut self) {
        self.selected = None;
        self.draft = EmployeeDraft::default();
    }

    /// Whether an employee is selected.
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Id of the selected employee.
    pub fn selected(&self) -> Option<EmployeeId> {
        self.selected
    }

    /// Update one input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        field.set(&mut self.draft, value);
    }

    /// Values as edited.
    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Apply the outcome of a save; closes on success.
    pub fn saved(&mut self, success: bool) {
        if success {
            self.close();
        }
    }

    /// Dialog contents, or an empty string when closed.
    pub fn render(&self) -> String {
        let Some(id) = self.selected else {
            return String::new();
        };
        let mut out = format!("{} #{id}\n", "Edit Employee".bold());
        render_fields(
            &mut out,
            &self.draft,
            ["Full Name", "Email Address", "Job Position"],
        );
        out
    }
}
