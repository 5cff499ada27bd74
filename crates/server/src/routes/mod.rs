//! API route handlers
//!
//! - `health`: liveness, readiness and Prometheus metrics
//! - `generate`: target-name generation
//! - `verify`: candidate verification against the stored target

pub mod generate;
pub mod health;
pub mod verify;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "namecheck",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "namecheck",
        "description": "Generate and verify names with deterministic matching",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /generate",
            "POST /verify",
            "GET /health",
            "GET /ready",
            "GET /metrics"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
