use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::logging_middleware;
use super::resources::create_resources_router;
use super::state::AppState;

/// Route table as `(method, path, description)`, resource routes listed once
/// for the root mount; each is also served under `/api`
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Health check"),
    ("GET", "/ready", "Readiness check"),
    ("GET", "/live", "Liveness check"),
    ("GET", "/api/", "API index"),
    ("POST", "/teams/", "Create a team"),
    ("GET", "/teams/", "List teams (offset, limit)"),
    ("GET", "/teams/{id}/", "Get a team by id"),
    ("GET", "/teams/by-name/", "Get a team by name (name)"),
    ("PATCH", "/teams/{id}/", "Update a team"),
    ("DELETE", "/teams/{id}/", "Delete a team and its heroes"),
    ("POST", "/heroes/", "Create a hero"),
    ("GET", "/heroes/", "List heroes (offset, limit)"),
    ("GET", "/heroes/{id}/", "Get a hero by id"),
    ("GET", "/heroes/by-name/", "Get a hero by name (name)"),
    ("GET", "/heroes/{team_id}/by-team/", "List a team's heroes (offset, limit)"),
    ("PATCH", "/heroes/{id}/", "Update a hero"),
    ("DELETE", "/heroes/{id}/", "Delete a hero"),
];

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .route("/api/", get(health::index))
        // Resources, at the root and under /api
        .merge(create_resources_router())
        .nest("/api", create_resources_router())
        // Add state and middleware
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
