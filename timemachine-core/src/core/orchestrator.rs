//! Generation fan-out / fan-in
//!
//! One prompt goes to every configured backend at once. Each call is its own task bounded by
//! the per-backend timeout; the batch waits for all of them and degrades individually, so a
//! request with N backends always yields N results in configuration order.

use crate::config::loader::GenerationConfig;
use crate::config::models::{
    BackendConfigError, ModelBackendConfig, Provider, validate_backends,
};
use crate::core::normalizer::normalize;
use crate::llm::error_display;
use crate::llm::factory::BackendRegistry;
use crate::llm::provider::LLMError;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// One slot of the game, in configuration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub year: i32,
    /// Display name of the backend
    pub model: String,
    #[serde(rename = "modelId")]
    pub model_id: String,
    /// Normalized completion, or the backend's placeholder
    pub output: String,
}

impl GenerationResult {
    fn from_outcome(config: &ModelBackendConfig, outcome: &Result<String, LLMError>) -> Self {
        let output = match outcome {
            Ok(raw) => normalize(raw),
            Err(_) => config.placeholder(),
        };

        Self {
            year: config.year,
            model: config.display_name.clone(),
            model_id: config.model_id.clone(),
            output,
        }
    }

    /// True when this slot carries the placeholder instead of model text
    pub fn is_placeholder(&self) -> bool {
        self.output == format!("[{} response]", self.model)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrchestrationError {
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error("invalid backend configuration: {0}")]
    InvalidConfiguration(#[from] BackendConfigError),
    #[error("generation task for year {year} did not complete: {reason}")]
    TaskJoin { year: i32, reason: String },
}

impl OrchestrationError {
    /// Caused by the request rather than by the service
    pub fn is_validation(&self) -> bool {
        matches!(self, OrchestrationError::EmptyPrompt)
    }
}

/// Fan-out settings resolved from [`GenerationConfig`]
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorSettings {
    pub backend_timeout: Duration,
    pub default_temperature: f32,
    pub default_max_tokens: u32,
}

impl From<&GenerationConfig> for OrchestratorSettings {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            backend_timeout: config.backend_timeout(),
            default_temperature: config.default_temperature,
            default_max_tokens: config.default_max_tokens,
        }
    }
}

impl Default for OrchestratorSettings {
    fn default() -> Self {
        Self::from(&GenerationConfig::default())
    }
}

#[derive(Debug, Clone)]
pub struct GenerationOrchestrator {
    registry: Arc<BackendRegistry>,
    settings: OrchestratorSettings,
}

impl GenerationOrchestrator {
    pub fn new(registry: Arc<BackendRegistry>, settings: OrchestratorSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &OrchestratorSettings {
        &self.settings
    }

    /// Send `prompt` to every backend in `configs` and collect one result per entry
    ///
    /// An empty `configs` yields an empty result. Fails only for an empty prompt, an invalid
    /// configuration set, or a task the runtime cancelled. Backend failures (including timeouts and panics) become placeholders.
    pub async fn orchestrate(
        &self,
        prompt: &str,
        configs: &[ModelBackendConfig],
    ) -> Result<Vec<GenerationResult>, OrchestrationError> {
        if prompt.trim().is_empty() {
            return Err(OrchestrationError::EmptyPrompt);
        }
        if configs.is_empty() {
            return Ok(Vec::new());
        }
        validate_backends(configs)?;

        let started = Instant::now();
        let prompt: Arc<str> = Arc::from(prompt);

        let handles: Vec<_> = configs
            .iter()
            .map(|config| {
                let resolved = config.resolved(
                    self.settings.default_temperature,
                    self.settings.default_max_tokens,
                );
                tokio::spawn(run_backend(
                    Arc::clone(&self.registry),
                    Arc::clone(&prompt),
                    resolved,
                    self.settings.backend_timeout,
                ))
            })
            .collect();

        let joined = join_all(handles).await;

        let mut results = Vec::with_capacity(configs.len());
        let mut degraded = 0usize;
        for (config, joined) in configs.iter().zip(joined) {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(join_error) if join_error.is_panic() => {
                    error!(year = config.year, model = %config.display_name, "backend task panicked");
                    Err(LLMError::Provider(error_display::format_llm_error(
                        config.provider,
                        "client panicked",
                    )))
                }
                Err(join_error) => {
                    return Err(OrchestrationError::TaskJoin {
                        year: config.year,
                        reason: join_error.to_string(),
                    });
                }
            };

            if let Err(err) = &outcome {
                degraded += 1;
                warn!(
                    year = config.year,
                    model = %config.display_name,
                    provider = %config.provider,
                    kind = err.kind(),
                    content_error = err.is_content_error(),
                    error = %err,
                    "backend degraded to placeholder"
                );
            }
            results.push(GenerationResult::from_outcome(config, &outcome));
        }

        info!(
            backends = results.len(),
            degraded,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "generation batch complete"
        );

        Ok(results)
    }
}

async fn run_backend(
    registry: Arc<BackendRegistry>,
    prompt: Arc<str>,
    config: ModelBackendConfig,
    timeout: Duration,
) -> Result<String, LLMError> {
    let client = registry
        .client_for(config.provider)
        .ok_or_else(|| missing_client(config.provider))?;

    debug!(
        year = config.year,
        provider = %config.provider,
        model = %config.model_id,
        "dispatching backend request"
    );

    match tokio::time::timeout(timeout, client.generate(&prompt, &config)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(LLMError::Timeout(timeout)),
    }
}

fn missing_client(provider: Provider) -> LLMError {
    LLMError::InvalidRequest(error_display::format_llm_error(
        provider,
        "no client registered for provider",
    ))
}
