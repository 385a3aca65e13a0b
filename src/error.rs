use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error as ThisError;
use tracing::error;
use utoipa::ToSchema;

use crate::db::StoreError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Missing required fields.")]
    MissingFields(Vec<String>),

    #[error("Invalid email format.")]
    InvalidEmail,

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDate,

    #[error("Invalid status. Use Present or Absent.")]
    InvalidStatus,

    #[error("Employee not found.")]
    EmployeeNotFound,

    #[error("Duplicate employee_id or email. Use unique values.")]
    DuplicateEmployee,

    #[error("Attendance for this employee and date already exists.")]
    DuplicateAttendance,

    #[error("Internal server error.")]
    Database(#[source] sqlx::Error),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmployeeNotFound => ApiError::EmployeeNotFound,
            StoreError::DuplicateEmployee => ApiError::DuplicateEmployee,
            StoreError::DuplicateAttendance => ApiError::DuplicateAttendance,
            StoreError::Database(e) => ApiError::Database(e),
        }
    }
}

impl ApiError {
    fn details(&self) -> Option<Value> {
        match self {
            ApiError::MissingFields(missing) => Some(json!({ "missing": missing })),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_)
            | ApiError::InvalidEmail
            | ApiError::InvalidDate
            | ApiError::InvalidStatus => StatusCode::BAD_REQUEST,
            ApiError::EmployeeNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateEmployee | ApiError::DuplicateAttendance => StatusCode::CONFLICT,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Database(e) = self {
            error!(error = %e, "Database operation failed");
        }

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details: self.details(),
        })
    }
}

/// Envelope used for every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "error": "Missing required fields.",
    "details": { "missing": ["email"] }
}))]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}
