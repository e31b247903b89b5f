//! Employee CRUD handlers.
//!
//! Path ids arrive as text. Text that is not an integer can never name a
//! stored row, so it takes the same not-found path as an absent id.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use roster_core::validation;
use roster_core::{ApiResponse, Employee, EmployeeDraft, EmployeeId};
use roster_store::StoreError;
use serde::Deserialize;
use tracing::{debug, info};

use super::with_store;
use crate::errors::ApiError;
use crate::server::AppState;

/// Handler outcome: status plus success envelope, or an [`ApiError`].
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

/// Query string accepted by the list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Case-sensitive substring of the employee name.
    pub search: Option<String>,
}

fn respond<T>(status: StatusCode, data: T, message: &str) -> ApiResult<T> {
    Ok((status, Json(ApiResponse::new(status.as_u16(), data, message))))
}

fn not_found(raw_id: &str) -> ApiError {
    ApiError::NotFound(format!("Employee with ID {raw_id} not found."))
}

/// A body sent without a JSON content type is read as an empty draft, so it
/// fails validation rather than decoding.
fn decode(body: Result<Json<EmployeeDraft>, JsonRejection>) -> Result<EmployeeDraft, ApiError> {
    let draft = match body {
        Ok(Json(draft)) => draft,
        Err(JsonRejection::MissingJsonContentType(_)) => EmployeeDraft::default(),
        Err(rejection) => return Err(ApiError::malformed_body(rejection.body_text())),
    };
    let violations = validation::check(&draft);
    if violations.is_empty() {
        Ok(draft)
    } else {
        Err(ApiError::validation(&violations))
    }
}

/// `GET {prefix}?search=`: all employees, or those whose name contains `search`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Employee>> {
    let employees = with_store(&state, move |store| store.list(params.search.as_deref())).await??;
    debug!(count = employees.len(), "listed employees");
    respond(StatusCode::OK, employees, "Employees fetched successfully.")
}

/// `GET {prefix}/{id}`
pub async fn get_one(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Employee> {
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return Err(not_found(&raw_id));
    };
    match with_store(&state, move |store| store.get_by_id(id)).await?? {
        Some(employee) => respond(StatusCode::OK, employee, "Employee fetched successfully."),
        None => Err(not_found(&raw_id)),
    }
}

/// `POST {prefix}`: validate then insert.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<Employee> {
    let draft = decode(body)?;
    let email = draft.email.clone();
    match with_store(&state, move |store| store.insert(&draft)).await? {
        Ok(employee) => {
            info!(employee_id = %employee.id, "employee created");
            respond(StatusCode::CREATED, employee, "Employee added successfully.")
        }
        Err(StoreError::UniqueViolation(_)) => Err(ApiError::email_conflict(format!(
            "The email address '{email}' is already in use."
        ))),
        Err(err) => Err(err.into()),
    }
}

/// `PUT {prefix}/{id}`: validate then rewrite all fields.
///
/// Responds with the submitted fields under the path id.
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<EmployeeDraft>, JsonRejection>,
) -> ApiResult<Employee> {
    let draft = decode(body)?;
    let missing = || {
        ApiError::NotFound(format!(
            "Employee with ID {raw_id} not found or no changes were made."
        ))
    };
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return Err(missing());
    };

    let submitted = draft.clone();
    match with_store(&state, move |store| store.update(id, &submitted)).await? {
        Ok(0) => Err(missing()),
        Ok(_) => {
            info!(employee_id = %id, "employee updated");
            respond(
                StatusCode::OK,
                Employee::from_draft(id, draft),
                "Employee updated successfully.",
            )
        }
        Err(StoreError::UniqueViolation(_)) => Err(ApiError::email_conflict(
            "Cannot update: another employee uses this email.",
        )),
        Err(err) => Err(err.into()),
    }
}

/// `DELETE {prefix}/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Option<Employee>> {
    let Ok(id) = raw_id.parse::<EmployeeId>() else {
        return Err(not_found(&raw_id));
    };
    match with_store(&state, move |store| store.delete(id)).await?? {
        0 => Err(not_found(&raw_id)),
        _ => {
            info!(employee_id = %id, "employee deleted");
            respond(StatusCode::OK, None, "Employee deleted successfully.")
        }
    }
}
