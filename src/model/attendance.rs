use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

/// Parsing is case-sensitive: only `Present` and `Absent` are accepted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "employee_id": "EMP-001",
    "date": "2026-01-05",
    "status": "Present",
    "created_at": "2026-01-05T09:00:00.000"
}))]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP-001")]
    pub employee_id: String,

    #[serde(rename = "date")]
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub att_date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(
        example = "2026-01-05T09:00:00.000",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: NaiveDateTime,
}

/// Request body for `POST /employees/{employee_id}/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "2026-01-05", format = "date")]
    pub date: String,
    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendanceMarked {
    #[schema(example = "Attendance marked.")]
    pub message: String,
    #[schema(example = "EMP-001")]
    pub employee_id: String,
    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_parse_is_case_sensitive() {
        assert_eq!(AttendanceStatus::from_str("Present").ok(), Some(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::from_str("Absent").ok(), Some(AttendanceStatus::Absent));
        for bad in ["present", "PRESENT", "Late", ""] {
            assert!(AttendanceStatus::from_str(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn serializes_with_date_key() {
        let record = Attendance {
            id: 7,
            employee_id: "E1".to_string(),
            att_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: AttendanceStatus::Absent,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["status"], "Absent");
        assert!(json.get("att_date").is_none());
    }
}
