//! namecheck server - HTTP API for name generation and verification
//!
//! Exposes the `namecheck` verification pipeline and an LLM-backed target
//! generator over JSON:
//!
//! - `POST /generate` - generate a name from a prompt and store it as the target
//! - `POST /verify` - compare a candidate name with the stored target
//! - `GET /health` - liveness probe
//! - `GET /ready` - readiness probe with component status
//! - `GET /metrics` - Prometheus metrics
//! - `GET /` - API information
//!
//! Errors are returned as `{"error": "<CODE>", "detail": "<text>"}`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiJson, ErrorResponse, ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
