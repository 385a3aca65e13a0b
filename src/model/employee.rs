use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP-001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2026-01-01T09:30:00.125"
    })
)]
pub struct Employee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2026-01-01T09:30:00.125",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
}

/// Validated, normalized employee ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeCreated {
    #[schema(example = "Employee created.")]
    pub message: String,
    #[schema(example = "EMP-001")]
    pub employee_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmployeeDeleted {
    #[schema(example = "Employee deleted.")]
    pub message: String,
    #[schema(example = "EMP-001")]
    pub employee_id: String,
}
