//! DDL executed at startup. Every statement is idempotent.

/// - `employees.employee_id` is caller-supplied, `email` is unique (stored lowercased)
/// - `attendance` rows cascade away with their employee
/// - at most one attendance row per employee per day (`uniq_employee_date`)
/// - timestamps keep millisecond precision so newest-first ordering is stable
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_id TEXT PRIMARY KEY NOT NULL,
    full_name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    department TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
);

CREATE TABLE IF NOT EXISTS attendance (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id TEXT NOT NULL REFERENCES employees(employee_id) ON DELETE CASCADE,
    att_date TEXT NOT NULL,
    status TEXT NOT NULL CHECK (status IN ('Present', 'Absent')),
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
    CONSTRAINT uniq_employee_date UNIQUE (employee_id, att_date)
);

CREATE INDEX IF NOT EXISTS idx_attendance_employee_id ON attendance(employee_id);
"#;
