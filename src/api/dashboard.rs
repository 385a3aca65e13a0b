use crate::{
    db::Store,
    error::{ApiError, ErrorBody},
    model::DashboardSummary,
};
use actix_web::{HttpResponse, web};

/// Dashboard summary
///
/// Employees without any `Present` record are left out of `present_days_per_employee`;
/// callers should read a missing key as zero.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Headcount, attendance total and present days", body = DashboardSummary),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Dashboard"
)]
pub async fn summary(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let summary = store.dashboard_summary().await?;
    Ok(HttpResponse::Ok().json(summary))
}
