use std::str::FromStr;

use crate::{
    api::json_payload,
    db::Store,
    error::{ApiError, ErrorBody},
    model::{Attendance, AttendanceMarked, AttendanceStatus, MarkAttendance},
    utils::validators::{field_text, parse_date, require_fields},
};
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AttendanceQuery {
    /// Only return the record for this day (`YYYY-MM-DD`)
    #[param(example = "2026-01-05")]
    pub date: Option<String>,
}

/// List attendance for an employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/attendance",
    params(
        ("employee_id" = String, Path, description = "Employee ID"),
        AttendanceQuery
    ),
    responses(
        (status = 200, description = "Attendance records, latest date first", body = [Attendance]),
        (status = 400, description = "Malformed date filter or query string", body = ErrorBody, example = json!({
            "error": "Invalid date format. Use YYYY-MM-DD."
        })),
        (status = 404, description = "Employee not found", body = ErrorBody)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<Store>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    // an empty `?date=` means no filter
    let date = match query.date.as_deref().filter(|d| !d.is_empty()) {
        Some(raw) => {
            let Some(date) = parse_date(raw) else {
                // an unknown employee is reported before a bad filter
                if !store.employee_exists(&employee_id).await? {
                    return Err(ApiError::EmployeeNotFound);
                }
                return Err(ApiError::InvalidDate);
            };
            Some(date)
        }
        None => None,
    };

    let records = store.list_attendance(&employee_id, date).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/employees/{employee_id}/attendance",
    params(
        ("employee_id" = String, Path, description = "Employee ID")
    ),
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = AttendanceMarked),
        (status = 400, description = "Missing fields, bad date or bad status", body = ErrorBody, example = json!({
            "error": "Invalid status. Use Present or Absent."
        })),
        (status = 404, description = "Employee not found", body = ErrorBody),
        (status = 409, description = "Already marked for that day", body = ErrorBody, example = json!({
            "error": "Attendance for this employee and date already exists."
        }))
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let (date, status) = parse_mark(&json_payload(&body))?;

    store.mark_attendance(&employee_id, date, status).await?;
    info!(employee_id = %employee_id, %date, %status, "Attendance marked");

    Ok(HttpResponse::Created().json(AttendanceMarked {
        message: "Attendance marked.".to_string(),
        employee_id,
        date,
    }))
}

pub fn parse_mark(payload: &Value) -> Result<(NaiveDate, AttendanceStatus), ApiError> {
    let missing = require_fields(payload, &["date", "status"]);
    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    let date = parse_date(&field_text(payload, "date")).ok_or(ApiError::InvalidDate)?;
    let status = AttendanceStatus::from_str(&field_text(payload, "status"))
        .map_err(|_| ApiError::InvalidStatus)?;

    Ok((date, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_trimmed_date_and_exact_status() {
        let (date, status) =
            parse_mark(&json!({ "date": " 2024-03-01 ", "status": "Absent" })).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(status, AttendanceStatus::Absent);
    }

    #[test]
    fn date_is_checked_before_status() {
        let err = parse_mark(&json!({ "date": "03/01/2024", "status": "Late" })).unwrap_err();
        assert!(matches!(err, ApiError::InvalidDate));
    }

    #[test]
    fn status_must_match_exactly() {
        for status in ["present", "PRESENT", "Late"] {
            let err = parse_mark(&json!({ "date": "2024-03-01", "status": status })).unwrap_err();
            assert!(matches!(err, ApiError::InvalidStatus), "{status:?}");
        }
    }

    #[test]
    fn missing_fields_listed() {
        let err = parse_mark(&json!({ "status": "" })).unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(ref m) if m == &["date", "status"]));
    }
}
