use crate::error::{ApiJson, ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Generate request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Free-text description of the name to generate
    pub prompt: String,
}

/// Generate response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub target_name: String,
}

/// Generate a target name from a prompt and store it as the new target.
///
/// The prompt is sanitized before it reaches the generator. A failed
/// generation leaves the previous target in place.
pub async fn generate_name(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<GenerateRequest>,
) -> ServerResult<Json<GenerateResponse>> {
    tracing::info!("Generate request received");
    if request.prompt.is_empty() {
        return Err(ServerError::Validation("prompt: must not be empty".into()));
    }

    let prompt = state.sanitizer.sanitize(&request.prompt);
    if prompt.trim().is_empty() {
        return Err(ServerError::Validation(
            "prompt: empty after sanitization".into(),
        ));
    }

    let target_name = match state.generator.generate(&prompt).await {
        Ok(name) => name,
        Err(err) => {
            metrics::counter!("namecheck_generate_total", "outcome" => "error").increment(1);
            return Err(err.into());
        }
    };

    state.store.set_target(target_name.clone());
    metrics::counter!("namecheck_generate_total", "outcome" => "ok").increment(1);
    tracing::info!("Name generated successfully");

    Ok(Json(GenerateResponse { target_name }))
}
