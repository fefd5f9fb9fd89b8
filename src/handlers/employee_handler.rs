use axum::{
    Extension, Json,
    extract::{
        OriginalUri, Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
};

use crate::models::employee::Employee;
use crate::schemas::employee_schema::EmployeeSchema;
use crate::services::EmployeeService;
use crate::utils::handler::HandlerResult;
use crate::utils::response::ApiError;
use crate::utils::validation::validate_payload;

fn employee_id(path: Result<Path<i64>, PathRejection>, uri: &Uri) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::bad_request(e.body_text(), uri))
}

fn employee_body(
    payload: Result<Json<EmployeeSchema>, JsonRejection>,
    uri: &Uri,
) -> Result<EmployeeSchema, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::bad_request(e.body_text(), uri))
}

// POST /api/employees/create
pub async fn store(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<EmployeeSchema>, JsonRejection>,
) -> HandlerResult<EmployeeSchema> {
    let payload = employee_body(payload, &uri)?;
    validate_payload(&payload)?;

    let employee = service
        .create(Employee::from(payload))
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

// GET /api/employees
pub async fn index(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
) -> HandlerResult<Vec<EmployeeSchema>> {
    let employees = service
        .list_all()
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    let body = employees.into_iter().map(EmployeeSchema::from).collect();
    Ok((StatusCode::OK, Json(body)))
}

// GET /api/employees/{id}
pub async fn show(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
) -> HandlerResult<EmployeeSchema> {
    let id = employee_id(path, &uri)?;
    let employee = service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok((StatusCode::OK, Json(employee.into())))
}

// PUT /api/employees/{id}
pub async fn update(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeSchema>, JsonRejection>,
) -> HandlerResult<EmployeeSchema> {
    let id = employee_id(path, &uri)?;
    let payload = employee_body(payload, &uri)?;
    validate_payload(&payload)?;

    let employee = service
        .full_update(id, Employee::from(payload))
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok((StatusCode::OK, Json(employee.into())))
}

// PATCH /api/employees/{id}
//
// No validation here: absent fields mean "unchanged", and supplied ones are
// written as-is, blank or malformed values included.
pub async fn patch(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeSchema>, JsonRejection>,
) -> HandlerResult<EmployeeSchema> {
    let id = employee_id(path, &uri)?;
    let payload = employee_body(payload, &uri)?;

    let employee = service
        .partial_update(id, Employee::from(payload))
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok((StatusCode::OK, Json(employee.into())))
}

// DELETE /api/employees/{id}
pub async fn destroy(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = employee_id(path, &uri)?;
    service
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok(StatusCode::NO_CONTENT)
}
