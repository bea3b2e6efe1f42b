//! Health check endpoint for load balancers and monitoring.
//!
//! Returns 200 OK if the service is healthy (database and cache reachable),
//! 503 Service Unavailable otherwise.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use shared::api::HealthResponse;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let db_ok = match state.repos.status.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "database health check failed");
            false
        }
    };
    let cache_ok = match state.stores.cache.health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "cache health check failed");
            false
        }
    };

    let healthy = db_ok && cache_ok;

    let response = HealthResponse {
        status: if healthy { "ok" } else { "unhealthy" }.to_string(),
        database: db_ok,
        cache: cache_ok,
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
