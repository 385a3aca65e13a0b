//! Plain-text console dashboard on top of [`ApiClient`].
//!
//! Nothing is cached between commands; every view refetches what it shows.

use chrono::{Local, NaiveDate};

use crate::client::{ApiClient, ClientError};
use crate::model::{Attendance, CreateEmployee, DashboardSummary, Employee, MarkAttendance};

pub const USAGE: &str = "\
usage: hrms-console <command>

commands:
  dashboard                              API status and totals
  employees                              employee list with present days
  add-employee <id> <name> <email> <dept>
  delete-employee <id>
  mark <id> <Present|Absent> [YYYY-MM-DD]  defaults to today
  attendance <id> [YYYY-MM-DD]           records, optionally for one day

environment:
  API_BASE  (default http://127.0.0.1:5000/api)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dashboard,
    Employees,
    AddEmployee(CreateEmployeeArgs),
    DeleteEmployee(String),
    Mark {
        employee_id: String,
        status: String,
        date: String,
    },
    Attendance {
        employee_id: String,
        date: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEmployeeArgs {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl Command {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        Self::parse_with_today(args, Local::now().date_naive())
    }

    fn parse_with_today(args: &[String], today: NaiveDate) -> Result<Self, String> {
        let (name, rest) = args.split_first().ok_or_else(|| USAGE.to_string())?;
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

        match (name.as_str(), rest.as_slice()) {
            ("dashboard", []) => Ok(Command::Dashboard),
            ("employees", []) => Ok(Command::Employees),
            ("add-employee", [id, full_name, email, dept]) => {
                Ok(Command::AddEmployee(CreateEmployeeArgs {
                    employee_id: id.to_string(),
                    full_name: full_name.to_string(),
                    email: email.to_string(),
                    department: dept.to_string(),
                }))
            }
            ("delete-employee", [id]) => Ok(Command::DeleteEmployee(id.to_string())),
            ("mark", [id, status]) => Ok(Command::Mark {
                employee_id: id.to_string(),
                status: status.to_string(),
                date: today.format("%Y-%m-%d").to_string(),
            }),
            ("mark", [id, status, date]) => Ok(Command::Mark {
                employee_id: id.to_string(),
                status: status.to_string(),
                date: date.to_string(),
            }),
            ("attendance", [id]) => Ok(Command::Attendance {
                employee_id: id.to_string(),
                date: None,
            }),
            ("attendance", [id, date]) => Ok(Command::Attendance {
                employee_id: id.to_string(),
                date: Some(date.to_string()),
            }),
            _ => Err(USAGE.to_string()),
        }
    }
}

/// Runs one command against the API and returns the text to print.
pub async fn run(client: &ApiClient, command: Command) -> Result<String, ClientError> {
    match command {
        Command::Dashboard => {
            let status = match client.health().await {
                Ok(_) => ApiStatus::Online,
                Err(e) => ApiStatus::Offline(e.to_string()),
            };
            // the status line is shown even when the totals cannot be fetched
            let summary = client.dashboard_summary().await;
            Ok(render_dashboard(&status, summary.as_ref()))
        }
        Command::Employees => {
            let employees = client.list_employees().await?;
            let summary = client.dashboard_summary().await?;
            Ok(render_employees(&employees, &summary))
        }
        Command::AddEmployee(args) => {
            let created = client
                .create_employee(&CreateEmployee {
                    employee_id: args.employee_id,
                    full_name: args.full_name,
                    email: args.email,
                    department: args.department,
                })
                .await?;
            Ok(format!("Employee created successfully ({})", created.employee_id))
        }
        Command::DeleteEmployee(employee_id) => {
            let deleted = client.delete_employee(&employee_id).await?;
            Ok(format!("Employee deleted ({})", deleted.employee_id))
        }
        Command::Mark {
            employee_id,
            status,
            date,
        } => {
            let marked = client
                .mark_attendance(&employee_id, &MarkAttendance { date, status })
                .await?;
            Ok(format!(
                "Attendance marked ({} on {})",
                marked.employee_id, marked.date
            ))
        }
        Command::Attendance { employee_id, date } => {
            let records = client.get_attendance(&employee_id, date.as_deref()).await?;
            Ok(render_attendance(&records))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatus {
    Online,
    Offline(String),
}

pub fn render_dashboard(
    status: &ApiStatus,
    summary: Result<&DashboardSummary, &ClientError>,
) -> String {
    let status_line = match status {
        ApiStatus::Online => "API Status: Online".to_string(),
        ApiStatus::Offline(reason) => format!("API Status: Offline ({reason})"),
    };
    match summary {
        Ok(summary) => format!(
            "{status_line}\n\nTotal Employees     {}\nAttendance Records  {}\n",
            summary.total_employees, summary.total_attendance_records
        ),
        Err(err) => format!("{status_line}\n\n{}\n", render_error(err)),
    }
}

/// Employee table with a `present_days` column, most present first.
pub fn render_employees(employees: &[Employee], summary: &DashboardSummary) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let mut rows: Vec<(i64, Vec<String>)> = employees
        .iter()
        .map(|e| {
            let present = summary.present_days(&e.employee_id);
            (
                present,
                vec![
                    e.employee_id.clone(),
                    e.full_name.clone(),
                    e.email.clone(),
                    e.department.clone(),
                    present.to_string(),
                ],
            )
        })
        .collect();
    // stable: equal counts keep the API's newest-first order
    rows.sort_by(|a, b| b.0.cmp(&a.0));

    render_table(
        &["employee_id", "full_name", "email", "department", "present_days"],
        &rows.into_iter().map(|(_, row)| row).collect::<Vec<_>>(),
    )
}

pub fn render_attendance(records: &[Attendance]) -> String {
    if records.is_empty() {
        return "No attendance records.\n".to_string();
    }

    let mut records: Vec<&Attendance> = records.iter().collect();
    records.sort_by(|a, b| b.att_date.cmp(&a.att_date));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| vec![r.att_date.format("%Y-%m-%d").to_string(), r.status.to_string()])
        .collect();
    render_table(&["date", "status"], &rows)
}

pub fn render_error(err: &ClientError) -> String {
    format!("Error: {err}")
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{cell:<w$}", w = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut out = String::new();
    out.push_str(&format_row(headers));
    out.push('\n');
    out.push_str(&format_row(&rule.iter().map(String::as_str).collect::<Vec<_>>()));
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(&row.iter().map(String::as_str).collect::<Vec<_>>()));
        out.push('\n');
    }
    out
}
