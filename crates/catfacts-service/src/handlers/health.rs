//! Liveness and store reachability.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    /// Always `catfacts`.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Which database backend is configured.
    pub database: &'static str,
    /// Whether the store answered a trivial query.
    pub database_reachable: bool,
}

/// Report liveness. Answers 503 while the fact store is unreachable.
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let reachable = match state.facts.store_reachable().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: store unreachable");
            false
        }
    };

    let (status_code, status) = if reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        service: "catfacts",
        version: env!("CARGO_PKG_VERSION"),
        database: state.config.database.backend_name(),
        database_reachable: reachable,
    };

    (status_code, Json(body))
}
