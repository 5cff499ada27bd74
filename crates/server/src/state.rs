use crate::config::ServerConfig;
use crate::error::ServerResult;
use generator::{NameGenerator, OpenAiGenerator};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use namecheck::{InMemoryTargetStore, Sanitizer, TargetStore, Verifier, VerifierConfig};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Current target name
    pub store: Arc<dyn TargetStore>,

    /// Verification pipeline reading from `store`
    pub verifier: Arc<Verifier>,

    /// Boundary cleanup for prompts and candidate names
    pub sanitizer: Arc<Sanitizer>,

    pub generator: Arc<dyn NameGenerator>,

    /// Prometheus render handle; `None` when metrics are disabled
    pub metrics: Option<PrometheusHandle>,

    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state with the OpenAI-backed generator.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let generator = Arc::new(OpenAiGenerator::new(config.generator.clone())?);
        Self::with_generator(config, generator)
    }

    /// Create server state around an arbitrary generator.
    pub fn with_generator(
        config: ServerConfig,
        generator: Arc<dyn NameGenerator>,
    ) -> ServerResult<Self> {
        let mut verifier_config = match &config.verifier_config_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading verifier config");
                VerifierConfig::from_file(path)?
            }
            None => VerifierConfig::default(),
        };
        if let Some(max_chars) = config.max_input_chars {
            verifier_config.sanitize.max_chars = max_chars;
        }

        let sanitizer = Sanitizer::new(verifier_config.sanitize.clone())
            .map_err(|e| crate::ServerError::Config(e.to_string()))?;
        let store: Arc<dyn TargetStore> = Arc::new(InMemoryTargetStore::new());
        let verifier = Verifier::new(store.clone(), &verifier_config)
            .map_err(|e| crate::ServerError::Config(e.to_string()))?;

        let metrics = if config.metrics_enabled {
            prometheus_handle()
        } else {
            None
        };

        Ok(Self {
            config: Arc::new(config),
            store,
            verifier: Arc::new(verifier),
            sanitizer: Arc::new(sanitizer),
            generator,
            metrics,
            started_at: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Installs the process-wide Prometheus recorder on first use.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "failed to install Prometheus recorder");
                None
            }
        })
        .clone()
}
