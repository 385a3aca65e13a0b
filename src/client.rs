//! HTTP façade over the HRMS API, used by the console dashboard.
//!
//! Every non-2xx response becomes [`ClientError::Api`] carrying the server's `error`
//! message and, when present, its `details`.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error as ThisError;

use crate::api::health::HealthStatus;
use crate::model::{
    Attendance, AttendanceMarked, CreateEmployee, DashboardSummary, Employee, EmployeeCreated,
    EmployeeDeleted, MarkAttendance,
};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, ThisError)]
pub enum ClientError {
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(http, base))
    }

    pub fn with_client(http: Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { http, base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        handle(resp).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let resp = self.http.get(self.url("/employees")).send().await?;
        handle(resp).await
    }

    pub async fn create_employee(
        &self,
        employee: &CreateEmployee,
    ) -> Result<EmployeeCreated, ClientError> {
        let resp = self
            .http
            .post(self.url("/employees"))
            .json(employee)
            .send()
            .await?;
        handle(resp).await
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<EmployeeDeleted, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/employees/{employee_id}")))
            .send()
            .await?;
        handle(resp).await
    }

    pub async fn mark_attendance(
        &self,
        employee_id: &str,
        mark: &MarkAttendance,
    ) -> Result<AttendanceMarked, ClientError> {
        let resp = self
            .http
            .post(self.url(&format!("/employees/{employee_id}/attendance")))
            .json(mark)
            .send()
            .await?;
        handle(resp).await
    }

    pub async fn get_attendance(
        &self,
        employee_id: &str,
        date: Option<&str>,
    ) -> Result<Vec<Attendance>, ClientError> {
        let mut req = self
            .http
            .get(self.url(&format!("/employees/{employee_id}/attendance")));
        if let Some(date) = date.filter(|d| !d.is_empty()) {
            req = req.query(&[("date", date)]);
        }
        handle(req.send().await?).await
    }

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ClientError> {
        let resp = self.http.get(self.url("/dashboard/summary")).send().await?;
        handle(resp).await
    }
}

async fn handle<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    let body = resp.bytes().await?;

    if !status.is_success() {
        return Err(failure_from_body(status.as_u16(), &body));
    }
    Ok(serde_json::from_slice(&body)?)
}

/// Builds the uniform failure for a non-2xx response body.
pub fn failure_from_body(status: u16, body: &[u8]) -> ClientError {
    let data: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(_) => {
            return ClientError::Api {
                status,
                message: "Server returned non-JSON response.".to_string(),
                details: None,
            };
        }
    };

    let mut message = data
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or("Request failed")
        .to_string();

    let details = data.get("details").filter(|d| !d.is_null()).cloned();
    if let Some(details) = &details {
        message = format!("{message} | {details}");
    }

    ClientError::Api {
        status,
        message,
        details,
    }
}
