use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use generator::GenerateError;
use namecheck::{ConfigLoadError, VerifyError};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Name generation failed: {0}")]
    Generation(#[from] GenerateError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Generation(_) | ServerError::Internal(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::Validation(_) => "VALIDATION_ERROR",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Timeout => "REQUEST_TIMEOUT",
            ServerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ServerError::Generation(_) => "GENERATION_FAILED",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }

        let body = Json(ErrorResponse {
            error: self.error_code().to_string(),
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<VerifyError> for ServerError {
    fn from(err: VerifyError) -> Self {
        match err {
            VerifyError::NoTargetSet => {
                ServerError::BadRequest("No target name set. Call /generate first.".to_string())
            }
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl From<ConfigLoadError> for ServerError {
    fn from(err: ConfigLoadError) -> Self {
        ServerError::Config(err.to_string())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ServerError::PayloadTooLarge(rejection.body_text());
        }
        ServerError::Validation(rejection.body_text())
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

impl From<std::io::Error> for ServerError {
    fn from(err: std::io::Error) -> Self {
        ServerError::Internal(format!("IO error: {err}"))
    }
}

/// JSON body extractor whose rejections use the [`ErrorResponse`] shape.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);
