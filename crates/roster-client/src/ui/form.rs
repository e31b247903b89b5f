//! Add-employee form.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use roster_core::EmployeeDraft;

/// Editable input of an employee form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Job position.
    Position,
}

impl Field {
    /// Inputs in display order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Position];

    /// Read this field from `draft`.
    pub fn get(self, draft: &EmployeeDraft) -> &str {
        match self {
            Self::Name => &draft.name,
            Self::Email => &draft.email,
            Self::Position => &draft.position,
        }
    }

    /// Write this field into `draft`.
    pub fn set(self, draft: &mut EmployeeDraft, value: impl Into<String>) {
        let slot = match self {
            Self::Name => &mut draft.name,
            Self::Email => &mut draft.email,
            Self::Position => &mut draft.position,
        };
        *slot = value.into();
    }
}

pub(crate) fn render_fields(out: &mut String, draft: &EmployeeDraft, labels: [&str; 3]) {
    for (field, label) in Field::ALL.into_iter().zip(labels) {
        let value = field.get(draft);
        if value.is_empty() {
            let _ = writeln!(out, "  {label}: {}", "(empty)".dimmed());
        } else {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }
}

/// Form for creating an employee. Clears after a successful submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    draft: EmployeeDraft,
}

impl EmployeeForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update one input.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        field.set(&mut self.draft, value);
    }

    /// Values as entered.
    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Apply the outcome of a submit.
    pub fn submitted(&mut self, success: bool) {
        if success {
            self.draft = EmployeeDraft::default();
        }
    }

    /// Form heading and current inputs.
    pub fn render(&self) -> String {
        let mut out = format!("{}\n", "Add New Employee".bold());
        render_fields(&mut out, &self.draft, ["Name", "Email", "Position"]);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new();
        form.set(Field::Name, "Ann");
        form.set(Field::Email, "ann@x.com");
        form.set(Field::Position, "Eng");
        form
    }

    #[test]
    fn fields_write_through() {
        assert_eq!(filled().draft(), &EmployeeDraft::new("Ann", "ann@x.com", "Eng"));
    }

    #[test]
    fn clears_on_success() {
        let mut form = filled();
        form.submitted(true);
        assert_eq!(form.draft(), &EmployeeDraft::default());
    }

    #[test]
    fn keeps_input_on_failure() {
        let mut form = filled();
        form.submitted(false);
        assert_eq!(form.draft().name, "Ann");
    }

    #[test]
    fn render_lists_inputs() {
        let text = filled().render();
        assert!(text.contains("Add New Employee"));
        assert!(text.contains("Name: Ann"));
        assert!(text.contains("Email: ann@x.com"));
        assert!(text.contains("Position: Eng"));
    }
}
