use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::{GenerateError, GeneratorConfig, NameGenerator};

/// [`NameGenerator`] backed by an OpenAI-compatible chat-completions API.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    cfg: GeneratorConfig,
    client: reqwest::Client,
}

impl OpenAiGenerator {
    /// Build a generator. The API key is resolved per request, so a missing
    /// key only fails [`generate`](NameGenerator::generate).
    pub fn new(cfg: GeneratorConfig) -> Result<Self, GenerateError> {
        cfg.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.timeout_secs.min(5)))
            .build()
            .map_err(|e| GenerateError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { cfg, client })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.cfg
    }

    async fn send_request(&self, api_key: &str, payload: Value) -> Result<Value, GenerateError> {
        let response = self
            .client
            .post(&self.cfg.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| GenerateError::Request(format!("HTTP request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, body });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| GenerateError::InvalidResponse(format!("invalid JSON response: {e}")))
    }
}

#[async_trait]
impl NameGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let api_key = self.cfg.resolve_api_key().ok_or(GenerateError::MissingApiKey)?;
        let payload = build_payload(&self.cfg, prompt);

        let started = Instant::now();
        info!(model = %self.cfg.model, "requesting name generation");
        let result = self
            .send_request(&api_key, payload)
            .await
            .and_then(parse_response);

        let latency_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => info!(model = %self.cfg.model, latency_ms, "name generated"),
            Err(err) => error!(model = %self.cfg.model, latency_ms, error = %err, "name generation failed"),
        }
        result
    }

    fn is_configured(&self) -> bool {
        self.cfg.resolve_api_key().is_some()
    }
}

/// Chat-completions request body: system instruction, then the prompt.
pub fn build_payload(cfg: &GeneratorConfig, prompt: &str) -> Value {
    json!({
        "model": cfg.model,
        "messages": [
            { "role": "system", "content": cfg.system_prompt },
            { "role": "user", "content": prompt },
        ],
        "max_tokens": cfg.max_tokens,
        "temperature": cfg.temperature,
    })
}

/// Extract the trimmed `choices[0].message.content`.
pub fn parse_response(value: Value) -> Result<String, GenerateError> {
    let choice = value
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .ok_or_else(|| GenerateError::InvalidResponse("missing `choices` array".into()))?;

    let content = match choice.pointer("/message/content") {
        Some(Value::String(text)) => text.trim(),
        Some(Value::Null) | None => return Err(GenerateError::EmptyName),
        Some(other) => {
            return Err(GenerateError::InvalidResponse(format!(
                "unexpected `message.content`: {other}"
            )))
        }
    };

    if content.is_empty() {
        return Err(GenerateError::EmptyName);
    }
    Ok(content.to_string())
}
