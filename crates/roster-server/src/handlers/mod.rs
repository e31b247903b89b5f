//! Request handlers.

pub mod employees;

use roster_store::EmployeeStore;

use crate::errors::ApiError;
use crate::server::AppState;

/// Run a store call on the blocking pool.
///
/// The outer error is a failed task; the inner result is the store's own.
pub(crate) async fn with_store<T, F>(
    state: &AppState,
    f: F,
) -> Result<roster_store::Result<T>, ApiError>
where
    F: FnOnce(&EmployeeStore) -> roster_store::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    Ok(tokio::task::spawn_blocking(move || f(&store)).await?)
}
