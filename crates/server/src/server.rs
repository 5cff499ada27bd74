//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (timeout, body limit, CORS, request id, logging)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{generate, health, verify};
use crate::state::ServerState;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware, outermost first:
/// 1. HTTP tracing
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Timeout handling (408 with the JSON error body)
/// 6. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route("/generate", post(generate::generate_name))
        .route("/verify", post(verify::verify_name))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(state.config.timeout()),
        )
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> ServerError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ServerError::Timeout
    } else {
        ServerError::Internal(format!("Unhandled middleware error: {err}"))
    }
}

/// Start the namecheck HTTP server
///
/// Sets up JSON logging, builds the shared state and router, then serves
/// until SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    let state = Arc::new(ServerState::new(config.clone())?);
    let generator_ready = state.generator.is_configured();
    let max_input_chars = state.sanitizer.config().max_chars;
    let app = build_router(state);

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting namecheck server on {}", addr);
    tracing::info!(
        "Timeout: {}s, Max body: {}KB, Max input: {} chars",
        config.timeout_secs,
        config.max_body_size_kb,
        max_input_chars
    );
    tracing::info!(
        "CORS: {}, Metrics: {}, Generator model: {}",
        config.enable_cors,
        config.metrics_enabled,
        config.generator.model
    );
    if !generator_ready {
        tracing::warn!("No generator API key configured; /generate will fail until one is set");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
