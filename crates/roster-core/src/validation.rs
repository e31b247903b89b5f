//! Field rules for employee drafts.
//!
//! The server and the client enforce the same rules through [`check`]; they
//! only differ in how the resulting [`Violation`]s are worded. The server
//! folds every missing field into one aggregate message, the client names
//! each field.

use std::sync::LazyLock;

use regex::Regex;

use crate::employee::EmployeeDraft;

/// Top-level message of a rejected request.
pub const VALIDATION_FAILED: &str = "Validation failed.";

/// Server message for any combination of missing fields.
pub const MISSING_FIELDS: &str = "All fields (name, email, position) are required.";

/// Message for an email that does not look like `local@domain.tld`.
pub const INVALID_EMAIL: &str = "Invalid email format.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// A single broken rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// `name` is empty or whitespace.
    MissingName,
    /// `email` is empty or whitespace.
    MissingEmail,
    /// `position` is empty or whitespace.
    MissingPosition,
    /// `email` is present but malformed.
    InvalidEmail,
}

impl Violation {
    /// Whether this violation is about an absent field.
    pub fn is_missing_field(self) -> bool {
        !matches!(self, Self::InvalidEmail)
    }

    /// Per-field wording used by the client.
    pub fn client_message(self) -> &'static str {
        match self {
            Self::MissingName => "Name is required.",
            Self::MissingEmail => "Email is required.",
            Self::MissingPosition => "Position is required.",
            Self::InvalidEmail => INVALID_EMAIL,
        }
    }
}

/// Whether `email` matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check a draft against every rule, in field order.
pub fn check(draft: &EmployeeDraft) -> Vec<Violation> {
    let mut violations = Vec::new();
    if is_blank(&draft.name) {
        violations.push(Violation::MissingName);
    }
    if is_blank(&draft.email) {
        violations.push(Violation::MissingEmail);
    }
    if is_blank(&draft.position) {
        violations.push(Violation::MissingPosition);
    }
    if !is_blank(&draft.email) && !is_valid_email(&draft.email) {
        violations.push(Violation::InvalidEmail);
    }
    violations
}

/// Server wording: one aggregate line for missing fields, then the email line.
pub fn server_messages(violations: &[Violation]) -> Vec<String> {
    let mut messages = Vec::new();
    if violations.iter().any(|v| v.is_missing_field()) {
        messages.push(MISSING_FIELDS.to_string());
    }
    if violations.contains(&Violation::InvalidEmail) {
        messages.push(INVALID_EMAIL.to_string());
    }
    messages
}

/// Client wording: one line per violation.
pub fn client_messages(violations: &[Violation]) -> Vec<String> {
    violations
        .iter()
        .map(|v| v.client_message().to_string())
        .collect()
}

/// Client notice text for a rejected form, or `None` if the draft is valid.
pub fn client_summary(draft: &EmployeeDraft) -> Option<String> {
    let violations = check(draft);
    if violations.is_empty() {
        return None;
    }
    Some(format!(
        "Validation failed: {}",
        client_messages(&violations).join(" ")
    ))
}
