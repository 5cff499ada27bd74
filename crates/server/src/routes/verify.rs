use crate::error::{ApiJson, ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use namecheck::VerificationResult;
use serde::Deserialize;
use std::sync::Arc;

/// Verify request
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub candidate_name: String,
}

/// Verify a candidate name against the stored target.
///
/// Responds with `{"match": bool, "confidence": float, "reason": string}`.
pub async fn verify_name(
    State(state): State<Arc<ServerState>>,
    ApiJson(request): ApiJson<VerifyRequest>,
) -> ServerResult<Json<VerificationResult>> {
    tracing::info!("Verify request received");
    if request.candidate_name.is_empty() {
        return Err(ServerError::Validation(
            "candidate_name: must not be empty".into(),
        ));
    }

    let candidate = state.sanitizer.sanitize(&request.candidate_name);
    let result = match state.verifier.verify(&candidate) {
        Ok(result) => result,
        Err(err) => {
            metrics::counter!("namecheck_verify_total", "outcome" => "error").increment(1);
            return Err(err.into());
        }
    };

    let outcome = if result.is_match { "match" } else { "no_match" };
    metrics::counter!("namecheck_verify_total", "outcome" => outcome).increment(1);
    metrics::histogram!("namecheck_verify_confidence").record(result.confidence);
    tracing::info!(
        is_match = result.is_match,
        confidence = result.confidence,
        "Verification complete"
    );

    Ok(Json(result))
}
