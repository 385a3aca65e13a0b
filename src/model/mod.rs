pub mod attendance;
pub mod dashboard;
pub mod employee;

pub use attendance::{Attendance, AttendanceMarked, AttendanceStatus, MarkAttendance};
pub use dashboard::DashboardSummary;
pub use employee::{CreateEmployee, Employee, EmployeeCreated, EmployeeDeleted, NewEmployee};
