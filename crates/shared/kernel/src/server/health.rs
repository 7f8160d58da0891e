use axum::http::header;
use axum::{Json, response::IntoResponse};
use changelog_derive::{api_handler, api_model};
use changelog_domain::constants::SYSTEM_TAG;
use changelog_domain::response::ApiResponse;
use chrono::{DateTime, Utc};
use std::sync::LazyLock;
use std::time::Instant;

/// Liveness report.
#[api_model]
pub(super) struct HealthResponse {
    status: String,
    version: String,
    /// Seconds since the router was built.
    uptime: u64,
    started_at: DateTime<Utc>,
}

static STARTED: LazyLock<(Instant, DateTime<Utc>)> = LazyLock::new(|| (Instant::now(), Utc::now()));

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Service is up", body = ApiResponse<HealthResponse>)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let (clock, started_at) = *STARTED;
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: clock.elapsed().as_secs(),
        started_at,
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(ApiResponse::ok(body)),
    )
}

/// Starts the uptime clock; called when the router is built.
pub(super) fn start_clock() {
    LazyLock::force(&STARTED);
}
