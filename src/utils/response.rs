use std::collections::BTreeMap;

use axum::{
    Json,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::services::ServiceError;

pub const VALIDATION_FAILED: &str = "Validation Failed";

/// Body for not-found, conflict and unclassified failures.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub details: String,
}

/// Body for rejected payloads: one message per offending field.
#[derive(Debug, Serialize)]
pub struct ValidationErrorDetails {
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub errors: BTreeMap<String, String>,
}

fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Request description carried in `ErrorDetails::details`.
pub fn describe(uri: &Uri) -> String {
    format!("uri={}", uri.path())
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    NotFound { message: String, details: String },

    #[error("Validation Failed")]
    Validation { errors: BTreeMap<String, String> },

    #[error("{message}")]
    Conflict { message: String, details: String },

    #[error("{message}")]
    BadRequest { message: String, details: String },

    #[error("{message}")]
    Internal { message: String, details: String },
}

impl ApiError {
    pub fn from_service(err: ServiceError, uri: &Uri) -> Self {
        let message = err.to_string();
        let details = describe(uri);
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound { message, details },
            ServiceError::ConstraintViolation(_) => ApiError::Conflict { message, details },
            ServiceError::Unclassified(_) => ApiError::Internal { message, details },
        }
    }

    pub fn bad_request(message: impl Into<String>, uri: &Uri) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            details: describe(uri),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation { errors } => {
                tracing::warn!(fields = ?errors.keys().collect::<Vec<_>>(), "request rejected by validation");
                let body = ValidationErrorDetails {
                    timestamp: now(),
                    message: VALIDATION_FAILED.to_string(),
                    errors,
                };
                (status, Json(body)).into_response()
            }
            ApiError::NotFound { message, details }
            | ApiError::Conflict { message, details }
            | ApiError::BadRequest { message, details }
            | ApiError::Internal { message, details } => {
                if status.is_server_error() {
                    tracing::error!(%message, %details, "request failed");
                } else {
                    tracing::warn!(%message, %details, "request rejected");
                }
                let body = ErrorDetails {
                    timestamp: now(),
                    message,
                    details,
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
