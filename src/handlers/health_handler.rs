use crate::services::EmployeeService;
use crate::utils::handler::HandlerResult;
use crate::utils::response::ApiError;
use axum::{Extension, Json, extract::OriginalUri, http::StatusCode};
use serde_json::{Value, json};

pub async fn health(
    Extension(service): Extension<EmployeeService>,
    OriginalUri(uri): OriginalUri,
) -> HandlerResult<Value> {
    // Round trip to the store
    service
        .ping()
        .await
        .map_err(|e| ApiError::from_service(e, &uri))?;
    Ok((StatusCode::OK, Json(json!({ "status": "ok", "db": "ok" }))))
}
