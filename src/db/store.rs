use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite, SqliteConnection};
use thiserror::Error as ThisError;
use tracing::debug;

use crate::db::schema::SQLITE_INIT;
use crate::model::{Attendance, AttendanceStatus, DashboardSummary, Employee, NewEmployee};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("employee not found")]
    EmployeeNotFound,

    /// The store cannot tell which of the two unique columns collided.
    #[error("duplicate employee_id or email")]
    DuplicateEmployee,

    #[error("attendance already recorded for this employee and date")]
    DuplicateAttendance,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

const ATTENDANCE_COLUMNS: &str = "id, employee_id, att_date, status, created_at";

/// Handle to the relational store. Cheap to clone; every operation checks out its own
/// pooled connection (or transaction) and releases it before returning.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create both tables if they do not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        // sqlx::query runs a single statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All employees, newest first.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_id, full_name, email, department, created_at
            FROM employees
            ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    pub async fn insert_employee(&self, employee: &NewEmployee) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&employee.employee_id)
        .bind(&employee.full_name)
        .bind(&employee.email)
        .bind(&employee.department)
        .execute(&mut *tx)
        .await;

        match result {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                Err(StoreError::DuplicateEmployee)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the employee and its attendance in one transaction.
    /// Returns how many attendance rows went with it.
    pub async fn delete_employee(&self, employee_id: &str) -> Result<u64, StoreError> {
        let mut tx = self.pool.begin().await?;

        // writes only, so the transaction takes the write lock on its first statement
        let removed = sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await?;
            return Err(StoreError::EmployeeNotFound);
        }

        tx.commit().await?;

        debug!(employee_id, attendance_removed = removed, "Employee row deleted");
        Ok(removed)
    }

    pub async fn mark_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO attendance (employee_id, att_date, status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(employee_id)
        .bind(date)
        .bind(status.as_str())
        .execute(&mut *tx)
        .await;

        match result {
            Ok(_) => {
                tx.commit().await?;
                Ok(())
            }
            Err(e) if is_unique_violation(&e) => {
                tx.rollback().await?;
                Err(StoreError::DuplicateAttendance)
            }
            // no employee row to reference
            Err(e) if is_foreign_key_violation(&e) => {
                tx.rollback().await?;
                Err(StoreError::EmployeeNotFound)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn employee_exists(&self, employee_id: &str) -> Result<bool, StoreError> {
        let mut conn = self.pool.acquire().await?;
        Ok(employee_exists(&mut conn, employee_id).await?)
    }

    /// Attendance for one employee, latest date first, optionally narrowed to a single day.
    pub async fn list_attendance(
        &self,
        employee_id: &str,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Attendance>, StoreError> {
        let mut conn = self.pool.acquire().await?;

        if !employee_exists(&mut conn, employee_id).await? {
            return Err(StoreError::EmployeeNotFound);
        }

        let rows = match date {
            Some(date) => {
                let sql = format!(
                    "SELECT {ATTENDANCE_COLUMNS} FROM attendance \
                     WHERE employee_id = ? AND att_date = ? ORDER BY att_date DESC"
                );
                debug!(sql = %sql, employee_id, %date, "Fetching attendance");
                sqlx::query(&sql)
                    .bind(employee_id)
                    .bind(date)
                    .fetch_all(&mut *conn)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {ATTENDANCE_COLUMNS} FROM attendance \
                     WHERE employee_id = ? ORDER BY att_date DESC"
                );
                debug!(sql = %sql, employee_id, "Fetching attendance");
                sqlx::query(&sql)
                    .bind(employee_id)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        let records = rows
            .into_iter()
            .map(Self::row_to_attendance)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Totals plus present-day counts, read in one transaction so they agree with each other.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, StoreError> {
        let mut tx = self.pool.begin().await?;

        let total_employees: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&mut *tx)
            .await?;

        let total_attendance_records: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM attendance")
            .fetch_one(&mut *tx)
            .await?;

        let present: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT employee_id, COUNT(*) AS present_days
            FROM attendance
            WHERE status = ?
            GROUP BY employee_id
            "#,
        )
        .bind(AttendanceStatus::Present.as_str())
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardSummary {
            total_employees,
            total_attendance_records,
            present_days_per_employee: present.into_iter().collect::<BTreeMap<_, _>>(),
        })
    }

    fn row_to_attendance(row: SqliteRow) -> Result<Attendance, sqlx::Error> {
        let status: String = row.try_get("status")?;
        let status =
            AttendanceStatus::from_str(&status).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        Ok(Attendance {
            id: row.try_get("id")?,
            employee_id: row.try_get("employee_id")?,
            att_date: row.try_get("att_date")?,
            status,
            created_at: row.try_get("created_at")?,
        })
    }
}

async fn employee_exists(conn: &mut SqliteConnection, employee_id: &str) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation())
}
