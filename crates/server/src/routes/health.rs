use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint (liveness)
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub target_set: bool,
    pub components: ReadinessComponents,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessComponents {
    pub verifier: String,
    pub generator: String,
    pub metrics: String,
}

/// Readiness check endpoint
///
/// Verification is always available; generation needs an API key.
pub async fn readiness_check(State(state): State<Arc<ServerState>>) -> Json<ReadinessResponse> {
    let generator = if state.generator.is_configured() {
        "ready"
    } else {
        "missing_api_key"
    };
    let metrics = if state.metrics.is_some() {
        "enabled"
    } else {
        "disabled"
    };

    Json(ReadinessResponse {
        status: "ready".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime_seconds: state.uptime_seconds(),
        target_set: state.store.get_target().is_some(),
        components: ReadinessComponents {
            verifier: "ready".to_string(),
            generator: generator.to_string(),
            metrics: metrics.to_string(),
        },
    })
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let handle = state.metrics.as_ref().ok_or(ServerError::NotFound)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}
