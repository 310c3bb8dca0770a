//! Health check endpoints for Kubernetes probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;

use super::state::AppState;

/// Health response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Greeting served at the API root
#[derive(Serialize)]
pub struct IndexResponse {
    pub name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: None,
        latency_ms: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check: the datastore must answer a count query
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let start = Instant::now();
    let result = state.team_service.list(0, 1).await;
    let latency_ms = Some(start.elapsed().as_millis() as u64);

    let (status_code, status, message) = match result {
        Ok(_) => (StatusCode::OK, HealthStatus::Healthy, None),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            HealthStatus::Unhealthy,
            Some(e.to_string()),
        ),
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        message,
        latency_ms,
    };

    (status_code, Json(response))
}

/// Liveness check
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /api/
pub async fn index() -> impl IntoResponse {
    Json(IndexResponse {
        name: "Heroes API",
        description: "Gestión de teams y héroes",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}
