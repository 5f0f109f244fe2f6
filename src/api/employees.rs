//! Employee API endpoints.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{
    patch, validate_name, CreateEmployeeRequest, Employee, EmployeeDto, EmployeeUpdate,
    UpdateEmployeeRequest,
};
use crate::AppState;

/// GET /api/Employee - List all employees.
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    tracing::info!("Listing all employees");
    let employees = state.store.list().await?;
    Ok(Json(employees))
}

/// GET /api/Employee/{id} - Get a single employee.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    reject_zero_id(id)?;

    let employee = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    Ok(Json(employee))
}

/// POST /api/Employee - Create a new employee.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = validate_name(request.name.as_deref())?;

    if state.store.find_by_name(&name).await?.is_some() {
        return Err(AppError::Validation("Employee already exists!".to_string()));
    }

    // Identifiers are store-assigned; a client-supplied one surfaces as a
    // server error rather than a validation failure.
    if request.id > 0 {
        tracing::error!("Create employee rejected: client-supplied id {}", request.id);
        return Err(AppError::Internal(
            "Employee id must not be supplied by the client".to_string(),
        ));
    }

    let employee = state
        .store
        .create(name, request.job, request.country)
        .await?;

    let location = format!("/api/Employee/{}", employee.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(employee),
    ))
}

/// PUT /api/Employee/{id} - Fully update an employee.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateEmployeeRequest>,
) -> Result<StatusCode, AppError> {
    reject_zero_id(id)?;

    // A body id of 0 is treated as unset; anything else must match the path.
    if request.id != 0 && request.id != id {
        tracing::warn!(
            "Update employee {}: body id {} does not match path",
            id,
            request.id
        );
        return Err(AppError::BadRequest(
            "Body id does not match path id".to_string(),
        ));
    }

    let name = validate_name(request.name.as_deref())?;

    state
        .store
        .update(
            id,
            &EmployeeUpdate {
                name,
                job: request.job,
                country: request.country,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/Employee/{id} - Partially update an employee.
///
/// The body is a JSON-patch-style array applied to the employee's wire
/// representation. Only the patched mutable fields are persisted; the
/// creation timestamp is preserved.
pub async fn patch_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<StatusCode, AppError> {
    reject_zero_id(id)?;

    let ops: Vec<patch::PatchOp> = serde_json::from_value(body)?;

    let employee = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

    let mut doc = serde_json::to_value(employee.to_dto())?;
    patch::apply(&mut doc, &ops)?;
    let patched: EmployeeDto = serde_json::from_value(doc)?;

    if patched.id != id {
        return Err(AppError::BadRequest(
            "Employee id is immutable".to_string(),
        ));
    }

    let name = validate_name(Some(&patched.name))?;

    state
        .store
        .update(
            id,
            &EmployeeUpdate {
                name,
                job: patched.job,
                country: patched.country,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/Employee/{id} - Delete an employee.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    reject_zero_id(id)?;

    state.store.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn reject_zero_id(id: i64) -> Result<(), AppError> {
    if id == 0 {
        tracing::error!("Employee request with id 0 rejected");
        return Err(AppError::BadRequest(
            "Employee id must be nonzero".to_string(),
        ));
    }
    Ok(())
}
