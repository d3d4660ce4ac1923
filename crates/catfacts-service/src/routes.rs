//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{facts, health, ui};
use crate::state::AppState;

/// Maximum concurrent requests for the JSON API.
const API_MAX_CONCURRENT_REQUESTS: usize = 50;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /` - Web page
/// - `GET /health` - Health check
///
/// ## Facts
/// - `GET /api/hecho` - Fetch, translate and store a random fact
/// - `POST /api/hechos` - Create a fact manually
/// - `GET /api/hechos` - List facts (`limit`, `offset`)
/// - `DELETE /api/hechos` - Delete every fact
/// - `GET /api/hechos/:id` - Get one fact
/// - `PUT /api/hechos/:id` - Update one fact
/// - `DELETE /api/hechos/:id` - Delete one fact
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors_origins);
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let state = Arc::new(state);

    let api_routes = Router::new()
        .route("/hecho", get(facts::random_fact))
        .route(
            "/hechos",
            get(facts::list_facts)
                .post(facts::create_fact)
                .delete(facts::delete_all_facts),
        )
        .route(
            "/hechos/:id",
            get(facts::get_fact)
                .put(facts::update_fact)
                .delete(facts::delete_fact),
        )
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
