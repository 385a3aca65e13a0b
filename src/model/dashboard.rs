use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "total_employees": 2,
    "total_attendance_records": 3,
    "present_days_per_employee": { "EMP-001": 2 }
}))]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub total_attendance_records: i64,
    /// Only employees with at least one `Present` record appear here.
    pub present_days_per_employee: BTreeMap<String, i64>,
}

impl DashboardSummary {
    pub fn present_days(&self, employee_id: &str) -> i64 {
        self.present_days_per_employee
            .get(employee_id)
            .copied()
            .unwrap_or(0)
    }
}
