use crate::api::health::HealthStatus;
use crate::error::ErrorBody;
use crate::model::{
    Attendance, AttendanceMarked, AttendanceStatus, CreateEmployee, DashboardSummary, Employee,
    EmployeeCreated, EmployeeDeleted, MarkAttendance,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "0.1.0",
        description = r#"
## HRMS Lite

A minimal **Human Resource Management** API.

### Features
- **Employees**: create, list and delete (deleting also removes the employee's attendance)
- **Attendance**: mark one `Present`/`Absent` record per employee per day, list with an optional date filter
- **Dashboard**: headcount, attendance total and present days per employee

### Errors
Every failure uses the same envelope: `{"error": "...", "details": ...}` where `details` is optional.

- `400` missing/invalid input
- `404` unknown employee
- `409` duplicate employee id/email or duplicate attendance for a day

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::list_employees,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::mark_attendance,

        crate::api::dashboard::summary
    ),
    components(
        schemas(
            HealthStatus,
            ErrorBody,
            Employee,
            CreateEmployee,
            EmployeeCreated,
            EmployeeDeleted,
            Attendance,
            AttendanceStatus,
            MarkAttendance,
            AttendanceMarked,
            DashboardSummary
        )
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Dashboard", description = "Aggregate counts"),
    )
)]
pub struct ApiDoc;
