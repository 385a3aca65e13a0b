use crate::{
    api::json_payload,
    db::Store,
    error::{ApiError, ErrorBody},
    model::{CreateEmployee, Employee, EmployeeCreated, EmployeeDeleted, NewEmployee},
    utils::validators::{field_text, is_valid_email, require_fields},
};
use actix_web::{HttpResponse, web};
use serde_json::Value;
use tracing::info;

const REQUIRED_FIELDS: [&str; 4] = ["employee_id", "full_name", "email", "department"];

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = [Employee]),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let employees = store.list_employees().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = EmployeeCreated),
        (status = 400, description = "Missing fields or invalid email", body = ErrorBody, example = json!({
            "error": "Missing required fields.",
            "details": { "missing": ["email"] }
        })),
        (status = 409, description = "Duplicate employee_id or email", body = ErrorBody, example = json!({
            "error": "Duplicate employee_id or email. Use unique values."
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let employee = parse_new_employee(&json_payload(&body))?;

    store.insert_employee(&employee).await?;
    info!(employee_id = %employee.employee_id, "Employee created");

    Ok(HttpResponse::Created().json(EmployeeCreated {
        message: "Employee created.".to_string(),
        employee_id: employee.employee_id,
    }))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee and its attendance deleted", body = EmployeeDeleted),
        (status = 404, description = "Employee not found", body = ErrorBody, example = json!({
            "error": "Employee not found."
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let removed = store.delete_employee(&employee_id).await?;
    info!(employee_id = %employee_id, attendance_removed = removed, "Employee deleted");

    Ok(HttpResponse::Ok().json(EmployeeDeleted {
        message: "Employee deleted.".to_string(),
        employee_id,
    }))
}

/// Checks and normalizes a create payload: trims every field, lowercases the email.
pub fn parse_new_employee(payload: &Value) -> Result<NewEmployee, ApiError> {
    let missing = require_fields(payload, &REQUIRED_FIELDS);
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let employee = NewEmployee {
        employee_id: field_text(payload, "employee_id"),
        full_name: field_text(payload, "full_name"),
        email: field_text(payload, "email").to_lowercase(),
        department: field_text(payload, "department"),
    };

    // whitespace-only values pass the presence check but are empty once trimmed
    let blank: Vec<String> = REQUIRED_FIELDS
        .iter()
        .zip([
            &employee.employee_id,
            &employee.full_name,
            &employee.email,
            &employee.department,
        ])
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field.to_string())
        .collect();
    if !blank.is_empty() {
        return Err(ApiError::MissingFields(blank));
    }

    if !is_valid_email(&employee.email) {
        return Err(ApiError::InvalidEmail);
    }

    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_fields_and_lowercases_email() {
        let employee = parse_new_employee(&json!({
            "employee_id": "  EMP-7 ",
            "full_name": " Ada Lovelace ",
            "email": " Ada@Example.COM ",
            "department": "R&D\t",
        }))
        .unwrap();

        assert_eq!(
            employee,
            NewEmployee {
                employee_id: "EMP-7".into(),
                full_name: "Ada Lovelace".into(),
                email: "ada@example.com".into(),
                department: "R&D".into(),
            }
        );
    }

    #[test]
    fn reports_missing_and_blank_fields() {
        let err = parse_new_employee(&json!({ "employee_id": "E1", "email": "" })).unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(ref m) if m == &["full_name", "email", "department"]));

        let err = parse_new_employee(&json!({
            "employee_id": "E1",
            "full_name": "   ",
            "email": "a@b.io",
            "department": "Ops",
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(ref m) if m == &["full_name"]));
    }

    #[test]
    fn rejects_bad_email() {
        let err = parse_new_employee(&json!({
            "employee_id": "E1",
            "full_name": "Jo",
            "email": "not-an-email",
            "department": "Ops",
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::InvalidEmail));
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let employee = parse_new_employee(&json!({
            "employee_id": 1001,
            "full_name": "Jo",
            "email": "jo@corp.io",
            "department": "Ops",
        }))
        .unwrap();
        assert_eq!(employee.employee_id, "1001");
    }
}
