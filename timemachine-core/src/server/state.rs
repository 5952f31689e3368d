//! Shared application state.

use std::sync::Arc;

use crate::config::loader::TimeMachineConfig;
use crate::config::models::ModelBackendConfig;
use crate::core::orchestrator::{GenerationOrchestrator, OrchestratorSettings};
use crate::llm::factory::BackendRegistry;

/// Read-only state shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub orchestrator: GenerationOrchestrator,
    pub backends: Arc<[ModelBackendConfig]>,
}

impl AppState {
    pub fn new(orchestrator: GenerationOrchestrator, backends: Vec<ModelBackendConfig>) -> Self {
        Self {
            orchestrator,
            backends: backends.into(),
        }
    }

    /// Build the state from loaded configuration and a provider registry
    pub fn from_config(config: &TimeMachineConfig, registry: BackendRegistry) -> Self {
        let orchestrator = GenerationOrchestrator::new(
            Arc::new(registry),
            OrchestratorSettings::from(&config.generation),
        );
        Self::new(orchestrator, config.backends.clone())
    }
}
