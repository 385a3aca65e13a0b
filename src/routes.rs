use crate::{
    api::{attendance, dashboard, employee, health},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpRequest, error::QueryPayloadError, middleware::Condition, web};
use tracing::{debug, warn};

use crate::error::ApiError;

// Helper to build the per-peer limiter
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let burst = requests_per_min.max(1);
    let per_ms = (60_000 / u64::from(burst)).max(1);

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_else(|| {
            warn!(requests_per_min, "Rejected rate limit settings, using governor defaults");
            GovernorConfig::default()
        });

    Governor::new(&cfg)
}

// The only query parameter is the attendance `date` filter.
fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = %req.path(), error = %err, "Rejected query string");
    ApiError::InvalidDate.into()
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config) {
    let limiter = build_limiter(config.rate_per_min);

    health::configure_root(cfg);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(config.rate_per_min > 0, limiter))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .route("/health", web::get().to(health::health))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{employee_id}/attendance
                    .service(
                        web::resource("/{employee_id}/attendance")
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::post().to(attendance::mark_attendance)),
                    ),
            )
            .service(
                web::resource("/dashboard/summary").route(web::get().to(dashboard::summary)),
            ),
    );
}
