//! `EmployeeBook`, the client-side state coordinator.
//!
//! Holds the employee list, loading flag, search term and load error, plus
//! a [`Notifier`] for transient outcomes. Mutations reconcile the local
//! list in place instead of reloading.

use std::sync::Arc;

use parking_lot::Mutex;
use roster_core::constants::DELETE_CONFIRMATION;
use roster_core::validation;
use roster_core::{Employee, EmployeeDraft, EmployeeId};
use tracing::{debug, warn};

use crate::api::EmployeeApi;
use crate::notice::{Notice, Notifier};

/// Asks the user a yes/no question.
pub trait ConfirmPrompt: Send + Sync {
    /// `true` when the user agrees.
    fn confirm(&self, question: &str) -> bool;
}

/// Snapshot of everything the list view renders from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookState {
    /// Employees currently shown.
    pub employees: Vec<Employee>,
    /// A list load is in flight.
    pub loading: bool,
    /// Active name filter.
    pub search_term: String,
    /// Why the last load failed.
    pub error: Option<String>,
}

impl Default for BookState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            loading: true,
            search_term: String::new(),
            error: None,
        }
    }
}

/// State coordinator between the UI and an [`EmployeeApi`].
pub struct EmployeeBook {
    api: Arc<dyn EmployeeApi>,
    state: Mutex<BookState>,
    notifier: Notifier,
}

impl EmployeeBook {
    /// Book over `api` with an empty list in the loading state.
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self::with_notifier(api, Notifier::new())
    }

    /// Book that reports outcomes through `notifier`.
    pub fn with_notifier(api: Arc<dyn EmployeeApi>, notifier: Notifier) -> Self {
        Self {
            api,
            state: Mutex::new(BookState::default()),
            notifier,
        }
    }

    /// Copy of the current state.
    pub fn state(&self) -> BookState {
        self.state.lock().clone()
    }

    /// The visible notice, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notifier.current()
    }

    /// Notice holder, for dismissing.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Change the name filter and reload.
    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.state.lock().search_term = term.into();
        self.load().await;
    }

    /// Fetch the list for the current search term.
    ///
    /// Failure leaves an inline error in the state; no notice is shown.
    pub async fn load(&self) {
        let term = {
            let mut state = self.state.lock();
            state.loading = true;
            state.error = None;
            state.search_term.clone()
        };

        let result = self.api.list(&term).await;

        let mut state = self.state.lock();
        match result {
            Ok(employees) => {
                debug!(count = employees.len(), search = %term, "employees loaded");
                state.employees = employees;
            }
            Err(err) => {
                warn!(error = %err, "employee load failed");
                state.error = Some(format!("Failed to load employees: {err}"));
            }
        }
        state.loading = false;
    }

    /// Validate and create; `true` on success (the form should clear).
    pub async fn add(&self, draft: &EmployeeDraft) -> bool {
        if let Some(summary) = validation::client_summary(draft) {
            self.notifier.error(summary);
            return false;
        }
        match self.api.create(draft).await {
            Ok(created) => {
                self.state.lock().employees.push(created);
                self.notifier.success("Employee added successfully!");
                true
            }
            Err(err) => {
                warn!(error = %err, "add failed");
                self.notifier.error(err.to_string());
                false
            }
        }
    }

    /// Validate and update employee `id`; `true` on success (the modal should close).
    pub async fn edit(&self, id: EmployeeId, draft: &EmployeeDraft) -> bool {
        if let Some(summary) = validation::client_summary(draft) {
            self.notifier.error(summary);
            return false;
        }
        match self.api.update(id, draft).await {
            Ok(updated) => {
                let mut state = self.state.lock();
                for slot in state.employees.iter_mut().filter(|e| e.id == id) {
                    *slot = updated.clone();
                }
                drop(state);
                self.notifier.success("Employee updated successfully!");
                true
            }
            Err(err) => {
                warn!(error = %err, employee_id = %id, "edit failed");
                self.notifier.error(err.to_string());
                false
            }
        }
    }

    /// Delete employee `id` once `prompt` confirms; `true` if it was deleted.
    pub async fn remove(&self, id: EmployeeId, prompt: &dyn ConfirmPrompt) -> bool {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return false;
        }
        match self.api.delete(id).await {
            Ok(()) => {
                self.state.lock().employees.retain(|e| e.id != id);
                self.notifier.success("Employee deleted successfully.");
                true
            }
            Err(err) => {
                warn!(error = %err, employee_id = %id, "delete failed");
                self.notifier.error(err.to_string());
                false
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
